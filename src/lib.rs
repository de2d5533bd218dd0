//! Binary-Heap Priority Queues for Rust
//!
//! This crate provides array-backed binary heaps, an index-coupled variant
//! whose entries can be updated or removed by key, and heapsort built from the
//! same sink/swim primitives.
//!
//! # Features
//!
//! - **Binary Heap** ([`binary::BinaryHeapPQ`]): resizable max- or min-heap over
//!   any ordering relation; O(log n) insert and delete-extremum, O(n) heapify
//! - **Indexed Heap** ([`indexed::IndexedHeap`]): integer keys mapped to mutable
//!   priorities; O(1) key lookup, O(log n) change-priority and delete-by-key
//! - **Heapsort** ([`sort`]): in-place Θ(n log n) sort, O(1) extra space
//! - **Array baselines** ([`array`]): unordered and ordered array queues, kept
//!   as simple correctness references
//!
//! All structures are single-threaded; wrap them in a lock if they must be
//! shared.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queues::PriorityQueue;
//! use rust_priority_queues::binary::MaxPQ;
//! use rust_priority_queues::indexed::IndexMaxPQ;
//!
//! let mut heap = MaxPQ::new();
//! for v in [5, 0, 10, 4] {
//!     heap.insert(v);
//! }
//! assert_eq!(heap.delete_extremum(), Some(10));
//!
//! let mut indexed = IndexMaxPQ::new(8);
//! indexed.insert(2, 20).unwrap();
//! indexed.insert(6, 60).unwrap();
//! indexed.change_priority(2, 99).unwrap();
//! assert_eq!(indexed.extremum_key(), Some(2));
//! ```

pub mod array;
pub mod binary;
pub mod config;
pub mod error;
mod heap_core;
pub mod indexed;
pub mod order;
pub mod sort;
pub mod traits;

// Re-export the main types for convenience
pub use error::HeapError;
pub use heap_core::ResizePolicy;
pub use order::{Compare, FnOrder, MaxOrder, MinOrder};
pub use traits::PriorityQueue;
