//! Sink/swim primitives shared by every heap-shaped structure
//!
//! Slots are numbered from 1 so that the parent of slot `i` is `i / 2` and its
//! children are `2i` and `2i + 1`. Implementors of [`HeapSlots`] decide how a
//! slot number maps onto their storage; none of them keep a dead slot 0.
//!
//! ```text
//!                 1
//!         2               3
//!     4       5       6       7
//!   8   9   10 11   12 13   14 15
//! ```

/// A 1-indexed view of a heap's occupied slots `1..=slot_count()`
pub(crate) trait HeapSlots {
    /// Number of occupied slots
    fn slot_count(&self) -> usize;

    /// True if the element in slot `a` must sit strictly above the one in slot `b`
    fn outranks(&self, a: usize, b: usize) -> bool;

    /// Swaps the contents of two occupied slots
    fn exchange(&mut self, a: usize, b: usize);
}

#[inline(always)]
pub(crate) fn parent(slot: usize) -> usize {
    slot / 2
}

#[inline(always)]
pub(crate) fn left_child(slot: usize) -> usize {
    2 * slot
}

/// Moves the element at `slot` toward the leaves until heap order holds
///
/// Returns the slot where the element came to rest.
pub(crate) fn sink<H: HeapSlots + ?Sized>(heap: &mut H, mut slot: usize) -> usize {
    let n = heap.slot_count();
    while left_child(slot) <= n {
        let mut child = left_child(slot);
        if child < n && heap.outranks(child + 1, child) {
            child += 1;
        }
        if !heap.outranks(child, slot) {
            break;
        }
        heap.exchange(slot, child);
        slot = child;
    }
    slot
}

/// Moves the element at `slot` toward the root until heap order holds
///
/// Returns the slot where the element came to rest.
pub(crate) fn swim<H: HeapSlots + ?Sized>(heap: &mut H, mut slot: usize) -> usize {
    while slot > 1 && heap.outranks(slot, parent(slot)) {
        heap.exchange(slot, parent(slot));
        slot = parent(slot);
    }
    slot
}

/// Restores order at a slot whose element may have moved either way
pub(crate) fn reposition<H: HeapSlots + ?Sized>(heap: &mut H, slot: usize) {
    let settled = swim(heap, slot);
    if settled == slot {
        sink(heap, slot);
    }
}

/// Bottom-up construction: sinks every internal node from `len / 2` down to 1
pub(crate) fn heapify<H: HeapSlots + ?Sized>(heap: &mut H) {
    for slot in (1..=heap.slot_count() / 2).rev() {
        sink(heap, slot);
    }
}

/// Checks heap order for every parent/child pair in `1..=slot_count()`
pub(crate) fn is_heap_ordered<H: HeapSlots + ?Sized>(heap: &H) -> bool {
    (2..=heap.slot_count()).all(|slot| !heap.outranks(slot, parent(slot)))
}

/// Capacity growth and shrink thresholds for resizable heaps
///
/// Doubling when full and halving at a quarter keeps the amortized resize cost
/// per operation constant while wasting at most a constant factor of space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePolicy;

impl ResizePolicy {
    /// New capacity to grow to before inserting, if the heap is full
    pub fn grow_target(len: usize, capacity: usize) -> Option<usize> {
        (len >= capacity).then(|| (2 * capacity).max(1))
    }

    /// New capacity to shrink to after a deletion, if occupancy hit a quarter
    pub fn shrink_target(len: usize, capacity: usize) -> Option<usize> {
        (len > 0 && len == capacity / 4).then_some(capacity / 2)
    }
}
