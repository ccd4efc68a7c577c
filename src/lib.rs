pub mod sort;
pub mod trace;
mod bubble_sort;
mod insertion_sort;
mod config;
mod driver;

pub use bubble_sort::{bubble_sort, bubble_sort_by, bubble_sort_observed};
pub use insertion_sort::{insertion_sort, insertion_sort_by, insertion_sort_observed};
pub use config::{COUNT, HIGH, LOW};
pub use driver::{default_cases, generate_random_vector, run_test, TestCase, TestReport};
pub use sort::{sort, sort_observed, sort_traced, Algorithm, Order};
pub use trace::{Action, Observer};
