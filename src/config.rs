//! Construction parameters for resizable heaps

/// Settings applied when a [`BinaryHeapPQ`](crate::binary::BinaryHeapPQ) is created
///
/// # Example
///
/// ```rust
/// use rust_priority_queues::config::HeapConfig;
/// use rust_priority_queues::binary::MaxPQ;
///
/// let config = HeapConfig::default().with_capacity(16).auto_shrink(false);
/// let heap: MaxPQ<u32> = MaxPQ::with_config(config);
/// assert_eq!(heap.capacity(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    /// Number of slots reserved up front
    pub initial_capacity: usize,
    /// Halve capacity when occupancy falls to a quarter
    pub auto_shrink: bool,
}

impl HeapConfig {
    /// Sets the initial slot capacity
    pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Enables or disables shrinking after deletions
    pub fn auto_shrink(mut self, enabled: bool) -> Self {
        self.auto_shrink = enabled;
        self
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            auto_shrink: true,
        }
    }
}
