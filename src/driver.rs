use log::{debug, info};
use rand::Rng;
use crate::config::{COUNT, HIGH, LOW};
use crate::sort::{sort, Algorithm, Order};

/// Returns `count` values drawn uniformly from the inclusive range `[low, high]`.
pub fn generate_random_vector<R: Rng + ?Sized>(rng: &mut R, low: u64, high: u64, count: usize) -> Vec<u64> {
    assert!(low <= high, "Empty sample range: low = {low} > high = {high}");
    (0..count).map(|_| rng.gen_range(low..=high)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    pub algorithm: Algorithm,
    pub order: Order,
    pub low: u64,
    pub high: u64,
    pub count: usize,
}

impl TestCase {
    pub fn new(algorithm: Algorithm, order: Order) -> TestCase {
        TestCase {
            algorithm,
            order,
            low: LOW,
            high: HIGH,
            count: COUNT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TestReport {
    pub algorithm: Algorithm,
    pub order: Order,
    pub input: Vec<u64>,
    /// output of the standard library sort
    pub expected: Vec<u64>,
    /// output of the candidate algorithm
    pub actual: Vec<u64>,
}

impl TestReport {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }

    /// `<name> vectors equal: <True|False>`
    pub fn summary(&self) -> String {
        let verdict = if self.passed() { "True" } else { "False" };
        format!("{} vectors equal: {}", self.algorithm.name(), verdict)
    }
}

/// The cases checked by the binary: bubble sort ascending, insertion sort descending.
pub fn default_cases() -> [TestCase; 2] {
    [
        TestCase::new(Algorithm::Bubble, Order::Ascending),
        TestCase::new(Algorithm::Insertion, Order::Descending),
    ]
}

/// Checks `case.algorithm` against the standard library sort on a fresh random vector.
pub fn run_test<R: Rng + ?Sized>(rng: &mut R, case: &TestCase) -> TestReport {
    let input = generate_random_vector(rng, case.low, case.high, case.count);
    debug!("Input: {:?}", input);

    let mut expected = input.clone();
    expected.sort_by(|a, b| case.order.compare(a, b));
    debug!("Reference: {:?}", expected);

    let mut actual = input.clone();
    sort(&mut actual, case.algorithm, case.order);
    debug!("{}: {:?}", case.algorithm, actual);

    let report = TestReport {
        algorithm: case.algorithm,
        order: case.order,
        input,
        expected,
        actual,
    };
    info!("{} ({:?}, n = {}): passed = {}", case.algorithm, case.order, case.count, report.passed());
    report
}
