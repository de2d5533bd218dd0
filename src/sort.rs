//! In-place heapsort
//!
//! Two phases over the same slice, with no auxiliary storage:
//!
//! 1. Bottom-up heapify turns the whole slice into a heap whose root is the
//!    greatest element under the ordering relation.
//! 2. Sort-down repeatedly swaps the root with the last unsorted element and
//!    sinks the new root over the shrunk prefix.
//!
//! Uses Θ(n log n) comparisons and O(1) extra space. Not stable.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queues::sort::{heap_sort, heap_sort_by, heap_sort_by_key};
//!
//! let mut values = [5, 0, 10, 4, 2, 1, 8, 9, 3, 6, 7, 4, 10];
//! heap_sort(&mut values);
//! assert_eq!(values, [0, 1, 2, 3, 4, 4, 5, 6, 7, 8, 9, 10, 10]);
//!
//! heap_sort_by(&mut values, |a, b| b.cmp(a));
//! assert_eq!(values, [10, 10, 9, 8, 7, 6, 5, 4, 4, 3, 2, 1, 0]);
//!
//! let mut words = ["ccc", "a", "bb"];
//! heap_sort_by_key(&mut words, |w| w.len());
//! assert_eq!(words, ["a", "bb", "ccc"]);
//! ```

use std::cmp::Ordering;

use crate::heap_core::{self, HeapSlots};
use crate::order::{Compare, FnOrder, MaxOrder};

/// The first `len` elements of a slice viewed as heap slots `1..=len`
struct SliceSlots<'a, T, C> {
    data: &'a mut [T],
    len: usize,
    order: &'a C,
}

impl<T, C: Compare<T>> HeapSlots for SliceSlots<'_, T, C> {
    #[inline]
    fn slot_count(&self) -> usize {
        self.len
    }

    #[inline]
    fn outranks(&self, a: usize, b: usize) -> bool {
        self.order.outranks(&self.data[a - 1], &self.data[b - 1])
    }

    #[inline]
    fn exchange(&mut self, a: usize, b: usize) {
        self.data.swap(a - 1, b - 1);
    }
}

/// Sort-down phase: `data` must already be heap-ordered under `order`
///
/// Leaves the slice arranged from the lowest-ranked element to the extremum.
pub(crate) fn sort_down<T, C: Compare<T>>(data: &mut [T], order: &C) {
    let mut slots = SliceSlots {
        len: data.len(),
        data,
        order,
    };
    while slots.len > 1 {
        slots.exchange(1, slots.len);
        slots.len -= 1;
        heap_core::sink(&mut slots, 1);
    }
}

fn sort_with<T, C: Compare<T>>(data: &mut [T], order: &C) {
    log::trace!("heapsorting {} elements", data.len());
    let mut slots = SliceSlots {
        len: data.len(),
        data,
        order,
    };
    heap_core::heapify(&mut slots);
    sort_down(slots.data, order);
}

/// Sorts `data` in ascending order
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    sort_with(data, &MaxOrder);
}

/// Sorts `data` so that `compare` holds between consecutive elements
///
/// The result is ascending with respect to `compare`, matching `slice::sort_by`.
pub fn heap_sort_by<T, F>(data: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    sort_with(data, &FnOrder::new(compare));
}

/// Sorts `data` in ascending order of the key extracted by `f`
pub fn heap_sort_by_key<T, K, F>(data: &mut [T], f: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    sort_with(data, &FnOrder::new(|a: &T, b: &T| f(a).cmp(&f(b))));
}
