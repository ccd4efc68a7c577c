use std::cmp::Ordering;
use std::fmt;
use crate::bubble_sort::bubble_sort_observed;
use crate::insertion_sort::insertion_sort_observed;
use crate::trace::{Action, Observer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    pub fn compare<T: Ord>(self, a: &T, b: &T) -> Ordering {
        match self {
            Order::Ascending => a.cmp(b),
            Order::Descending => b.cmp(a),
        }
    }

    /// True if every neighbouring pair of `arr` respects this order.
    pub fn is_sorted<T: Ord>(self, arr: &[T]) -> bool {
        arr.windows(2).all(|w| self.compare(&w[0], &w[1]) != Ordering::Greater)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    Insertion,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Bubble, Algorithm::Insertion];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble sort",
            Algorithm::Insertion => "Insertion sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sorts `arr` in place with `algorithm`, in the given `order`.
pub fn sort<T: Ord>(arr: &mut [T], algorithm: Algorithm, order: Order) {
    sort_observed(arr, algorithm, order, &mut ());
}

pub fn sort_observed<T, O>(arr: &mut [T], algorithm: Algorithm, order: Order, observer: &mut O)
where
    T: Ord,
    O: Observer + ?Sized,
{
    let compare = |a: &T, b: &T| order.compare(a, b);
    match algorithm {
        Algorithm::Bubble => bubble_sort_observed(arr, compare, observer),
        Algorithm::Insertion => insertion_sort_observed(arr, compare, observer),
    }
}

/// Sorts `arr` and returns every step taken.
pub fn sort_traced<T: Ord>(arr: &mut [T], algorithm: Algorithm, order: Order) -> Vec<Action> {
    let mut actions = Vec::new();
    sort_observed(arr, algorithm, order, &mut actions);
    actions
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use crate::trace::replay;
    use super::*;

    #[test]
    fn test_order_compare() {
        assert_eq!(Order::Ascending.compare(&1, &2), Ordering::Less);
        assert_eq!(Order::Descending.compare(&1, &2), Ordering::Greater);
        assert_eq!(Order::Descending.compare(&3, &3), Ordering::Equal);
    }

    #[test]
    fn test_is_sorted() {
        assert!(Order::Ascending.is_sorted::<u64>(&[]));
        assert!(Order::Ascending.is_sorted(&[1, 1, 2]));
        assert!(!Order::Ascending.is_sorted(&[2, 1]));
        assert!(Order::Descending.is_sorted(&[3, 3, 0]));
    }

    #[test]
    fn test_dispatch() {
        for algorithm in Algorithm::ALL {
            for order in [Order::Ascending, Order::Descending] {
                let mut arr = vec![8u64, 3, 5, 3, 0, 200, 17];
                sort(&mut arr, algorithm, order);
                assert!(order.is_sorted(&arr), "{algorithm} {order:?}: {arr:?}");
            }
        }
    }

    #[test]
    fn test_replay_reproduces_result() {
        let mut rng = StdRng::seed_from_u64(12345);
        for algorithm in Algorithm::ALL {
            let input: Vec<u64> = (0..32).map(|_| rng.gen_range(0..=50)).collect();
            let mut sorted = input.clone();
            let actions = sort_traced(&mut sorted, algorithm, Order::Ascending);

            let mut replayed = input.clone();
            replay(&mut replayed, &actions);
            assert_eq!(replayed, sorted);
            assert_eq!(actions.iter().filter(|a| **a == Action::Finish).count(), 1);
            assert_eq!(actions.last(), Some(&Action::Finish));
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Algorithm::Bubble.to_string(), "Bubble sort");
        assert_eq!(Algorithm::Insertion.name(), "Insertion sort");
    }
}
