use std::cmp::Ordering;
use log::trace;
use crate::trace::Observer;

/// Sorts `arr` in place, in ascending order. Stable.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    bubble_sort_observed(arr, T::cmp, &mut ());
}

/// Sorts `arr` in place with the comparator `compare`.
pub fn bubble_sort_by<T, F>(arr: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort_observed(arr, compare, &mut ());
}

pub fn bubble_sort_observed<T, F, O>(arr: &mut [T], mut compare: F, observer: &mut O)
where
    F: FnMut(&T, &T) -> Ordering,
    O: Observer + ?Sized,
{
    let n = arr.len();
    if n <= 1 {
        observer.finish();
        return;
    }

    for pass in 0..n - 1 {
        let mut swaps = 0;
        for j in 0..n - 1 - pass {
            // equal neighbours are never swapped
            let in_order = compare(&arr[j], &arr[j + 1]) != Ordering::Greater;
            observer.compare(j, j + 1, in_order);
            if !in_order {
                arr.swap(j, j + 1);
                observer.swap(j, j + 1);
                swaps += 1;
            }
        }
        trace!("Pass {pass}: {swaps} swaps");
        if swaps == 0 {
            break;
        }
    }
    observer.finish();
}
