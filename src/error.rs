//! Error type shared by every priority queue in this crate
//!
//! Emptiness is normally reported as `None` on the hot path; [`HeapError::Empty`]
//! exists for callers who prefer `?` and go through the `try_*` variants.

use thiserror::Error;

/// Error type for priority queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Extremum query or removal on an empty queue
    #[error("priority queue is empty")]
    Empty,
    /// The key is already present in the indexed heap
    #[error("key {key} is already present")]
    DuplicateKey {
        /// The rejected key
        key: usize,
    },
    /// The key is within range but not currently present
    #[error("key {key} is not present")]
    KeyNotFound {
        /// The missing key
        key: usize,
    },
    /// The key lies outside the key domain `[0, capacity)`
    #[error("key {key} is outside the key domain [0, {capacity})")]
    KeyOutOfRange {
        /// The rejected key
        key: usize,
        /// Size of the key domain
        capacity: usize,
    },
}
