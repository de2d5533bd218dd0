//! Index-coupled binary heap
//!
//! An [`IndexedHeap`] associates each integer key in a fixed domain
//! `[0, key_capacity)` with a mutable priority. Besides the usual extremum
//! operations it can change or delete the priority of *any* key in O(log n),
//! which is what Dijkstra- or Prim-style algorithms need.
//!
//! # Layout
//!
//! Two dense arrays are kept in lockstep:
//!
//! - `heap[i - 1]` holds the `(key, priority)` pair occupying slot `i`
//! - `slot_of[key]` holds the slot currently containing `key`, or `None`
//!
//! Every slot exchange rewrites `slot_of` for both keys it moves, so that
//! `slot_of[heap[i - 1].0] == Some(i)` holds for every occupied slot between
//! public calls.
//!
//! # Time Complexity
//!
//! | Operation                                 | Complexity |
//! |-------------------------------------------|------------|
//! | `contains_key`, `priority_of`             | O(1)       |
//! | `extremum_key`, `extremum_priority`       | O(1)       |
//! | `insert`, `delete_key`, `change_priority` | O(log n)   |
//! | `delete_extremum_key`                     | O(log n)   |
//! | `from_pairs`                              | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queues::indexed::IndexMinPQ;
//!
//! let mut pq = IndexMinPQ::new(10);
//! pq.insert(3, 30).unwrap();
//! pq.insert(7, 10).unwrap();
//! pq.insert(1, 20).unwrap();
//! assert_eq!(pq.extremum_key(), Some(7));
//!
//! pq.change_priority(3, 5).unwrap();
//! assert_eq!(pq.extremum_key(), Some(3));
//!
//! pq.delete_key(1).unwrap();
//! assert_eq!(pq.delete_extremum_key(), Some(3));
//! assert_eq!(pq.delete_extremum_key(), Some(7));
//! assert!(pq.is_empty());
//! ```

use crate::error::HeapError;
use crate::heap_core::{self, HeapSlots};
use crate::order::{Compare, MaxOrder, MinOrder};

/// A binary heap of `(key, priority)` pairs addressable by key
#[derive(Debug, Clone)]
pub struct IndexedHeap<P, C = MaxOrder> {
    heap: Vec<(usize, P)>,
    slot_of: Vec<Option<usize>>,
    order: C,
}

/// Indexed heap whose extremum is the key with the largest priority
pub type IndexMaxPQ<P> = IndexedHeap<P, MaxOrder>;

/// Indexed heap whose extremum is the key with the smallest priority
pub type IndexMinPQ<P> = IndexedHeap<P, MinOrder>;

impl<P, C: Compare<P> + Default> IndexedHeap<P, C> {
    /// Creates an empty heap accepting keys in `[0, key_capacity)`
    pub fn new(key_capacity: usize) -> Self {
        Self::with_order(key_capacity, C::default())
    }

    /// Bulk-loads `(key, priority)` pairs with bottom-up heapify
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::KeyOutOfRange`] or [`HeapError::DuplicateKey`] for
    /// the first offending pair; nothing is built in that case.
    pub fn from_pairs<I>(key_capacity: usize, pairs: I) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = (usize, P)>,
    {
        Self::from_pairs_with_order(key_capacity, pairs, C::default())
    }
}

impl<P, C: Compare<P>> IndexedHeap<P, C> {
    /// Creates an empty heap over `[0, key_capacity)` ranked by `order`
    pub fn with_order(key_capacity: usize, order: C) -> Self {
        Self {
            heap: Vec::with_capacity(key_capacity),
            slot_of: vec![None; key_capacity],
            order,
        }
    }

    /// Bulk-loads `(key, priority)` pairs under `order`
    pub fn from_pairs_with_order<I>(
        key_capacity: usize,
        pairs: I,
        order: C,
    ) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = (usize, P)>,
    {
        let mut indexed = Self::with_order(key_capacity, order);
        for (key, priority) in pairs {
            indexed.validate_key(key)?;
            if indexed.slot_of[key].is_some() {
                return Err(HeapError::DuplicateKey { key });
            }
            indexed.heap.push((key, priority));
            indexed.slot_of[key] = Some(indexed.heap.len());
        }
        log::trace!("heapifying {} keyed entries", indexed.heap.len());
        heap_core::heapify(&mut indexed);
        indexed.check_invariants();
        Ok(indexed)
    }

    /// Size of the key domain
    pub fn key_capacity(&self) -> usize {
        self.slot_of.len()
    }

    /// Number of keys currently present
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no key is present
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Checks that `key` lies in `[0, key_capacity)`
    pub fn validate_key(&self, key: usize) -> Result<(), HeapError> {
        if key < self.slot_of.len() {
            Ok(())
        } else {
            Err(HeapError::KeyOutOfRange {
                key,
                capacity: self.slot_of.len(),
            })
        }
    }

    /// Returns true if `key` is present; out-of-range keys are never present
    pub fn contains_key(&self, key: usize) -> bool {
        matches!(self.slot_of.get(key), Some(Some(_)))
    }

    /// Current priority of `key`, if present
    pub fn priority_of(&self, key: usize) -> Option<&P> {
        let slot = self.slot_of(key)?;
        self.heap.get(slot - 1).map(|(_, priority)| priority)
    }

    /// Heap slot (1-based) currently holding `key`, if present
    pub fn slot_of(&self, key: usize) -> Option<usize> {
        self.slot_of.get(key).copied().flatten()
    }

    /// Key of the extremum
    pub fn extremum_key(&self) -> Option<usize> {
        self.heap.first().map(|&(key, _)| key)
    }

    /// Priority of the extremum
    pub fn extremum_priority(&self) -> Option<&P> {
        self.heap.first().map(|(_, priority)| priority)
    }

    /// Key and priority of the extremum
    pub fn peek(&self) -> Option<(usize, &P)> {
        self.heap.first().map(|(key, priority)| (*key, priority))
    }

    /// Keys in slot order
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.heap.iter().map(|&(key, _)| key)
    }

    /// `(key, priority)` pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &P)> + '_ {
        self.heap.iter().map(|(key, priority)| (*key, priority))
    }

    /// Associates `key` with `priority`
    ///
    /// # Errors
    ///
    /// [`HeapError::KeyOutOfRange`] or [`HeapError::DuplicateKey`]; the heap is
    /// unchanged on error.
    pub fn insert(&mut self, key: usize, priority: P) -> Result<(), HeapError> {
        self.validate_key(key)?;
        if self.slot_of[key].is_some() {
            return Err(HeapError::DuplicateKey { key });
        }

        self.heap.push((key, priority));
        let slot = self.heap.len();
        self.slot_of[key] = Some(slot);
        heap_core::swim(self, slot);
        self.check_invariants();
        Ok(())
    }

    /// Replaces the priority of `key`, returning the old one
    ///
    /// The new priority may move the key in either direction.
    pub fn change_priority(&mut self, key: usize, priority: P) -> Result<P, HeapError> {
        let slot = self.present_slot(key)?;
        let old = std::mem::replace(&mut self.heap[slot - 1].1, priority);
        heap_core::reposition(self, slot);
        self.check_invariants();
        Ok(old)
    }

    /// Removes `key`, returning its priority
    pub fn delete_key(&mut self, key: usize) -> Result<P, HeapError> {
        let slot = self.present_slot(key)?;
        Ok(self.remove_slot(slot))
    }

    /// Removes the extremum, returning its key
    pub fn delete_extremum_key(&mut self) -> Option<usize> {
        self.pop().map(|(key, _)| key)
    }

    /// Like [`delete_extremum_key`](Self::delete_extremum_key), reporting emptiness as an error
    pub fn try_delete_extremum_key(&mut self) -> Result<usize, HeapError> {
        self.delete_extremum_key().ok_or(HeapError::Empty)
    }

    /// Removes the extremum, returning its key and priority
    pub fn pop(&mut self) -> Option<(usize, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let key = self.heap[0].0;
        let priority = self.remove_slot(1);
        Some((key, priority))
    }

    /// Removes every key
    pub fn clear(&mut self) {
        for (key, _) in self.heap.drain(..) {
            self.slot_of[key] = None;
        }
    }

    /// Returns true if heap order and the key/slot bijection both hold
    pub fn is_consistent(&self) -> bool {
        let mapped = self.slot_of.iter().filter(|slot| slot.is_some()).count();
        mapped == self.heap.len()
            && self
                .heap
                .iter()
                .enumerate()
                .all(|(i, &(key, _))| self.slot_of.get(key) == Some(&Some(i + 1)))
            && heap_core::is_heap_ordered(self)
    }

    /// Slot of a key that must be present
    fn present_slot(&self, key: usize) -> Result<usize, HeapError> {
        self.validate_key(key)?;
        self.slot_of[key].ok_or(HeapError::KeyNotFound { key })
    }

    /// Moves the last slot into `slot`, unmaps the displaced key and restores order
    fn remove_slot(&mut self, slot: usize) -> P {
        let last = self.heap.len();
        self.exchange(slot, last);
        let (key, priority) = match self.heap.pop() {
            Some(entry) => entry,
            None => unreachable!("remove_slot called on an empty heap"),
        };
        self.slot_of[key] = None;

        if slot <= self.heap.len() {
            heap_core::reposition(self, slot);
        }
        self.check_invariants();
        priority
    }

    #[inline]
    fn check_invariants(&self) {
        #[cfg(feature = "invariant-checks")]
        debug_assert!(self.is_consistent(), "indexed heap invariants violated");
    }
}

impl<P: Ord, C: Compare<P>> IndexedHeap<P, C> {
    /// Raises the priority of `key` to `priority`
    ///
    /// Returns `Ok(false)` and leaves the heap untouched when `priority` is not
    /// strictly greater than the current one.
    pub fn increase_priority(&mut self, key: usize, priority: P) -> Result<bool, HeapError> {
        let slot = self.present_slot(key)?;
        if priority <= self.heap[slot - 1].1 {
            return Ok(false);
        }
        self.shift_priority(slot, priority);
        Ok(true)
    }

    /// Lowers the priority of `key` to `priority`
    ///
    /// Returns `Ok(false)` and leaves the heap untouched when `priority` is not
    /// strictly less than the current one.
    pub fn decrease_priority(&mut self, key: usize, priority: P) -> Result<bool, HeapError> {
        let slot = self.present_slot(key)?;
        if priority >= self.heap[slot - 1].1 {
            return Ok(false);
        }
        self.shift_priority(slot, priority);
        Ok(true)
    }

    /// Applies a priority change of known direction with a one-way fix-up
    fn shift_priority(&mut self, slot: usize, priority: P) {
        let old = std::mem::replace(&mut self.heap[slot - 1].1, priority);
        if self.order.outranks(&self.heap[slot - 1].1, &old) {
            heap_core::swim(self, slot);
        } else if self.order.outranks(&old, &self.heap[slot - 1].1) {
            heap_core::sink(self, slot);
        }
        self.check_invariants();
    }
}

impl<P, C: Compare<P>> HeapSlots for IndexedHeap<P, C> {
    #[inline]
    fn slot_count(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    fn outranks(&self, a: usize, b: usize) -> bool {
        self.order.outranks(&self.heap[a - 1].1, &self.heap[b - 1].1)
    }

    #[inline]
    fn exchange(&mut self, a: usize, b: usize) {
        self.heap.swap(a - 1, b - 1);
        self.slot_of[self.heap[a - 1].0] = Some(a);
        self.slot_of[self.heap[b - 1].0] = Some(b);
    }
}
