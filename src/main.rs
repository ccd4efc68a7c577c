use log::LevelFilter;
use rand::thread_rng;

use sortcheck::{default_cases, run_test};

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let mut rng = thread_rng();
    for case in default_cases() {
        let report = run_test(&mut rng, &case);
        println!("{}", report.summary());
    }
}
