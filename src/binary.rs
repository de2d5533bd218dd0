//! Resizable binary heap over comparable values
//!
//! [`BinaryHeapPQ`] stores its elements in a dense vector laid out as an
//! implicit complete binary tree. The ordering relation is a type parameter,
//! so the same code serves as a max-heap ([`MaxPQ`]), a min-heap ([`MinPQ`]),
//! or a heap under any custom comparator.
//!
//! Capacity is tracked separately from length: it doubles when an insert finds
//! the heap full and halves when a deletion leaves it a quarter full (unless
//! disabled through [`HeapConfig`]).
//!
//! # Time Complexity
//!
//! | Operation          | Complexity         |
//! |--------------------|--------------------|
//! | `insert`           | O(log n) amortized |
//! | `delete_extremum`  | O(log n) amortized |
//! | `peek`             | O(1)               |
//! | `remove_at`        | O(log n) amortized |
//! | `from_vec`         | O(n)               |
//! | `into_sorted_vec`  | O(n log n)         |
//!
//! Equal elements come out in no particular order.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queues::PriorityQueue;
//! use rust_priority_queues::binary::{MaxPQ, MinPQ};
//!
//! let mut max = MaxPQ::from_vec(vec![4, 5, 2, 1, 3]);
//! assert_eq!(max.peek(), Some(&5));
//! assert_eq!(max.delete_extremum(), Some(5));
//! assert_eq!(max.peek(), Some(&4));
//!
//! let mut min: MinPQ<i32> = [3, 1, 5, 2, 4].into_iter().collect();
//! assert_eq!(min.delete_extremum(), Some(1));
//! assert_eq!(min.delete_extremum(), Some(2));
//! ```

use crate::config::HeapConfig;
use crate::heap_core::{self, HeapSlots, ResizePolicy};
use crate::order::{Compare, MaxOrder, MinOrder};
use crate::sort;
use crate::traits::PriorityQueue;

/// A binary heap whose root is the greatest element under `C`
#[derive(Debug, Clone)]
pub struct BinaryHeapPQ<T, C = MaxOrder> {
    /// Slot `i` lives at `data[i - 1]`
    data: Vec<T>,
    /// Logical slot capacity governed by [`ResizePolicy`]
    capacity: usize,
    auto_shrink: bool,
    order: C,
}

/// Binary heap yielding the largest element first
pub type MaxPQ<T> = BinaryHeapPQ<T, MaxOrder>;

/// Binary heap yielding the smallest element first
pub type MinPQ<T> = BinaryHeapPQ<T, MinOrder>;

impl<T, C: Compare<T> + Default> BinaryHeapPQ<T, C> {
    /// Creates an empty heap with no reserved slots
    pub fn new() -> Self {
        Self::with_config(HeapConfig::default())
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(HeapConfig::default().with_capacity(capacity))
    }

    /// Creates an empty heap from explicit construction parameters
    pub fn with_config(config: HeapConfig) -> Self {
        Self::with_config_and_order(config, C::default())
    }

    /// Builds a heap from arbitrary values in O(n) using bottom-up heapify
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::from_vec_with_order(values, C::default())
    }
}

impl<T, C: Compare<T>> BinaryHeapPQ<T, C> {
    /// Creates an empty heap ranked by a custom ordering relation
    pub fn with_order(order: C) -> Self {
        Self::with_config_and_order(HeapConfig::default(), order)
    }

    /// Creates an empty heap from construction parameters and an ordering relation
    pub fn with_config_and_order(config: HeapConfig, order: C) -> Self {
        Self {
            data: Vec::with_capacity(config.initial_capacity),
            capacity: config.initial_capacity,
            auto_shrink: config.auto_shrink,
            order,
        }
    }

    /// Builds a heap from arbitrary values under `order` in O(n)
    ///
    /// Sinks every internal node from the last one up to the root, which costs
    /// fewer than 2n comparisons in total.
    pub fn from_vec_with_order(values: Vec<T>, order: C) -> Self {
        let mut heap = Self {
            capacity: values.len(),
            data: values,
            auto_shrink: true,
            order,
        };
        log::trace!("heapifying {} elements", heap.data.len());
        heap_core::heapify(&mut heap);
        heap.check_invariants();
        heap
    }

    /// Number of slots currently reserved
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over the elements in slot order (arbitrary, not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Removes every element, keeping the reserved capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning its elements in slot order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements with the extremum last
    ///
    /// The result is ascending under `C`, not under `T: Ord`: a [`MaxPQ`]
    /// yields ascending natural order but a [`MinPQ`] yields descending
    /// natural order. This differs from `std::collections::BinaryHeap`, whose
    /// `into_sorted_vec` is always ascending. Runs the sort-down phase of
    /// heapsort in place, without copying the elements.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let Self {
            mut data, order, ..
        } = self;
        sort::sort_down(&mut data, &order);
        data
    }

    /// Removes and returns the element at `slot` (1-based), or `None` if the
    /// slot is unoccupied
    ///
    /// The last element fills the hole and is moved up or down as needed, so
    /// this costs O(log n). Together with [`iter`](Self::iter) it allows
    /// removing an arbitrary element, e.g. a randomly sampled one.
    pub fn remove_at(&mut self, slot: usize) -> Option<T> {
        if slot == 0 || slot > self.data.len() {
            return None;
        }

        let last = self.data.len();
        self.exchange(slot, last);
        let removed = self.data.pop();
        if slot < last {
            heap_core::reposition(self, slot);
        }

        self.shrink_if_sparse();
        self.check_invariants();
        removed
    }

    /// Returns true if every parent outranks or ties with its children
    pub fn is_heap_ordered(&self) -> bool {
        heap_core::is_heap_ordered(self)
    }

    /// Reallocates backing storage to `new_capacity` slots
    ///
    /// No-op when `new_capacity` would not hold every occupied slot.
    fn resize(&mut self, new_capacity: usize) {
        if new_capacity <= self.data.len() {
            return;
        }
        log::debug!(
            "resizing heap from {} to {} slots ({} occupied)",
            self.capacity,
            new_capacity,
            self.data.len()
        );
        if new_capacity > self.data.capacity() {
            self.data.reserve_exact(new_capacity - self.data.len());
        } else {
            self.data.shrink_to(new_capacity);
        }
        self.capacity = new_capacity;
    }

    fn shrink_if_sparse(&mut self) {
        if self.auto_shrink {
            if let Some(shrunk) = ResizePolicy::shrink_target(self.data.len(), self.capacity) {
                self.resize(shrunk);
            }
        }
    }

    #[inline]
    fn check_invariants(&self) {
        #[cfg(feature = "invariant-checks")]
        debug_assert!(self.is_heap_ordered(), "heap order violated");
    }
}

impl<T, C: Compare<T>> HeapSlots for BinaryHeapPQ<T, C> {
    #[inline]
    fn slot_count(&self) -> usize {
        self.data.len()
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

impl<T, C: Compare<T>> PriorityQueue<T> for BinaryHeapPQ<T, C> {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn insert(&mut self, value: T) {
        if let Some(grown) = ResizePolicy::grow_target(self.data.len(), self.capacity) {
            self.resize(grown);
        }
        self.data.push(value);
        let last = self.data.len();
        heap_core::swim(self, last);
        self.check_invariants();
    }

    fn delete_extremum(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.pop();
        heap_core::sink(self, 1);

        self.shrink_if_sparse();
        self.check_invariants();
        top
    }
}

impl<T, C: Compare<T> + Default> Default for BinaryHeapPQ<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryHeapPQ<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeapPQ<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C: Compare<T> + Default> From<Vec<T>> for BinaryHeapPQ<T, C> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::FnOrder;

    const SAMPLE: [i32; 13] = [5, 0, 10, 4, 2, 1, 8, 9, 3, 6, 7, 4, 10];

    fn drain<T, C: Compare<T>>(heap: &mut BinaryHeapPQ<T, C>) -> Vec<T> {
        std::iter::from_fn(|| heap.delete_extremum()).collect()
    }

    #[test]
    fn test_basic_operations() {
        let mut heap: MaxPQ<i32> = MaxPQ::with_capacity(5);

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.peek(), None);

        for v in [3, 1, 5, 2, 4] {
            heap.insert(v);
        }

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek(), Some(&5));
        assert_eq!(heap.delete_extremum(), Some(5));
        assert_eq!(heap.peek(), Some(&4));
        assert_eq!(heap.len(), 4);
    }

    #[test]
    fn test_extraction_is_non_increasing() {
        let mut heap = MaxPQ::new();
        for v in SAMPLE {
            heap.insert(v);
        }
        assert_eq!(
            drain(&mut heap),
            vec![10, 10, 9, 8, 7, 6, 5, 4, 4, 3, 2, 1, 0]
        );
        assert_eq!(heap.delete_extremum(), None);
    }

    #[test]
    fn test_min_heap() {
        let mut heap: MinPQ<i32> = MinPQ::with_capacity(5);
        for v in [3, 1, 5, 2, 4] {
            heap.insert(v);
        }
        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.delete_extremum(), Some(1));
        assert_eq!(heap.delete_extremum(), Some(2));
        assert_eq!(heap.peek(), Some(&3));
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn test_from_vec_heapifies() {
        let heap = MaxPQ::from_vec(vec![4, 5, 2, 1, 3]);
        assert!(heap.is_heap_ordered());
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.capacity(), 5);
        assert_eq!(heap.peek(), Some(&5));
    }

    #[test]
    fn test_from_vec_small_inputs() {
        let empty: MaxPQ<i32> = MaxPQ::from_vec(Vec::new());
        assert!(empty.is_empty());

        // Two and three elements have a single internal node that must still sink
        let mut two = MaxPQ::from_vec(vec![1, 2]);
        assert_eq!(two.delete_extremum(), Some(2));
        let mut three = MinPQ::from_vec(vec![3, 2, 1]);
        assert_eq!(three.delete_extremum(), Some(1));
    }

    #[test]
    fn test_growth_doubles_capacity() {
        let mut heap = MaxPQ::with_capacity(4);
        for v in 0..4 {
            heap.insert(v);
        }
        assert_eq!(heap.capacity(), 4);

        heap.insert(4);
        assert_eq!(heap.capacity(), 8);
        assert!(heap.is_heap_ordered());
        assert_eq!(drain(&mut heap), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_growth_from_zero_capacity() {
        let mut heap = MinPQ::new();
        assert_eq!(heap.capacity(), 0);
        heap.insert(1);
        assert_eq!(heap.capacity(), 1);
        heap.insert(2);
        assert_eq!(heap.capacity(), 2);
        heap.insert(3);
        assert_eq!(heap.capacity(), 4);
    }

    #[test]
    fn test_shrink_at_quarter() {
        let mut heap = MaxPQ::with_capacity(8);
        for v in 0..8 {
            heap.insert(v);
        }
        for _ in 0..5 {
            heap.delete_extremum();
        }
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.capacity(), 8);

        heap.delete_extremum();
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.capacity(), 4);

        heap.delete_extremum();
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.capacity(), 2);

        // Draining the last element never shrinks to zero
        heap.delete_extremum();
        assert_eq!(heap.capacity(), 2);
    }

    #[test]
    fn test_auto_shrink_disabled() {
        let config = HeapConfig::default().with_capacity(8).auto_shrink(false);
        let mut heap: MaxPQ<i32> = MaxPQ::with_config(config);
        for v in 0..8 {
            heap.insert(v);
        }
        while heap.delete_extremum().is_some() {}
        assert_eq!(heap.capacity(), 8);
    }

    #[test]
    fn test_custom_order() {
        let by_len = FnOrder::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
        let mut heap = BinaryHeapPQ::with_order(by_len);
        for word in ["a", "abcd", "ab", "abc"] {
            heap.insert(word);
        }
        assert_eq!(drain(&mut heap), vec!["abcd", "abc", "ab", "a"]);
    }

    #[test]
    fn test_into_sorted_vec() {
        let heap = MaxPQ::from_vec(SAMPLE.to_vec());
        assert_eq!(
            heap.into_sorted_vec(),
            vec![0, 1, 2, 3, 4, 4, 5, 6, 7, 8, 9, 10, 10]
        );

        // Ascending under the min ordering is descending natural order
        let heap = MinPQ::from_vec(vec![2, 3, 1]);
        assert_eq!(heap.into_sorted_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn test_remove_at_every_slot() {
        for slot in 1..=SAMPLE.len() {
            let mut heap = MaxPQ::from_vec(SAMPLE.to_vec());
            let expected = heap.iter().nth(slot - 1).copied();

            assert_eq!(heap.remove_at(slot), expected);
            assert_eq!(heap.len(), SAMPLE.len() - 1);
            assert!(heap.is_heap_ordered());

            let mut rest = SAMPLE.to_vec();
            let pos = rest.iter().position(|&v| Some(v) == expected).unwrap();
            rest.remove(pos);
            rest.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(drain(&mut heap), rest);
        }
    }

    #[test]
    fn test_remove_at_swims_replacement() {
        // Removing slot 7 pulls the last element (6) from the left subtree
        // under parent 2, where it has to swim
        let mut heap = MaxPQ::from_vec(vec![10, 9, 2, 8, 7, 1, 0, 6]);
        assert_eq!(heap.iter().copied().collect::<Vec<_>>(), vec![10, 9, 2, 8, 7, 1, 0, 6]);

        assert_eq!(heap.remove_at(7), Some(0));
        assert!(heap.is_heap_ordered());
        assert_eq!(heap.iter().copied().collect::<Vec<_>>(), vec![10, 9, 6, 8, 7, 1, 2]);
    }

    #[test]
    fn test_remove_at_rejects_unoccupied_slots() {
        let mut heap = MinPQ::from_vec(vec![4, 1, 3]);
        assert_eq!(heap.remove_at(0), None);
        assert_eq!(heap.remove_at(4), None);
        assert_eq!(heap.len(), 3);

        assert_eq!(heap.remove_at(3), Some(3));
        assert_eq!(heap.remove_at(1), Some(1));
        assert_eq!(heap.remove_at(1), Some(4));
        assert_eq!(heap.remove_at(1), None);
    }

    #[test]
    fn test_remove_at_shrinks() {
        let mut heap = MaxPQ::with_capacity(8);
        for v in 0..8 {
            heap.insert(v);
        }
        while heap.len() > 2 {
            let last = heap.len();
            heap.remove_at(last);
        }
        assert_eq!(heap.capacity(), 4);
    }

    #[test]
    fn test_extend_and_clear() {
        let mut heap = MinPQ::new();
        heap.extend([9, 4, 7]);
        assert_eq!(heap.peek(), Some(&4));
        assert_eq!(heap.iter().count(), 3);

        let capacity = heap.capacity();
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), capacity);
    }

    #[test]
    fn test_from_conversion() {
        let heap: MaxPQ<u8> = vec![1, 9, 3].into();
        assert_eq!(heap.peek(), Some(&9));
        let mut slots = heap.into_vec();
        slots.sort_unstable();
        assert_eq!(slots, vec![1, 3, 9]);
    }
}
