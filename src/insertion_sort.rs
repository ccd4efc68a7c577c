use std::cmp::Ordering;
use log::trace;
use crate::trace::Observer;

/// Sorts `arr` in place, in ascending order. Stable.
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    insertion_sort_observed(arr, T::cmp, &mut ());
}

/// Sorts `arr` in place with the comparator `compare`.
pub fn insertion_sort_by<T, F>(arr: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort_observed(arr, compare, &mut ());
}

pub fn insertion_sort_observed<T, F, O>(arr: &mut [T], mut compare: F, observer: &mut O)
where
    F: FnMut(&T, &T) -> Ordering,
    O: Observer + ?Sized,
{
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 {
            let in_order = compare(&arr[j - 1], &arr[j]) != Ordering::Greater;
            observer.compare(j, j - 1, in_order);
            if in_order {
                break;
            }
            arr.swap(j - 1, j);
            observer.swap(j, j - 1);
            j -= 1;
        }
        trace!("Element {i} inserted at {j}");
    }
    observer.finish();
}
