//! Common trait for value priority queues
//!
//! [`PriorityQueue`] is the contract shared by the binary heap and the two
//! array baselines, so algorithms (and tests) can be written once against it.
//! The indexed heap has a richer key-based API and does not implement it.

use crate::error::HeapError;

/// A queue that always hands out its extremum first
///
/// Which element counts as the extremum depends on the ordering relation the
/// queue was built with: the largest under [`MaxOrder`](crate::order::MaxOrder),
/// the smallest under [`MinOrder`](crate::order::MinOrder).
///
/// # Example
///
/// ```rust
/// use rust_priority_queues::PriorityQueue;
/// use rust_priority_queues::binary::MaxPQ;
///
/// let mut pq = MaxPQ::new();
/// pq.insert(3);
/// pq.insert(1);
/// pq.insert(2);
///
/// assert_eq!(pq.peek(), Some(&3));
/// assert_eq!(pq.delete_extremum(), Some(3));
/// assert_eq!(pq.len(), 2);
/// ```
pub trait PriorityQueue<T> {
    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns the extremum without removing it
    fn peek(&self) -> Option<&T>;

    /// Adds an element
    fn insert(&mut self, value: T);

    /// Removes and returns the extremum, or `None` if the queue is empty
    fn delete_extremum(&mut self) -> Option<T>;

    /// Like [`delete_extremum`](Self::delete_extremum), reporting emptiness as an error
    fn try_delete_extremum(&mut self) -> Result<T, HeapError> {
        self.delete_extremum().ok_or(HeapError::Empty)
    }
}
