//! Array-backed baseline priority queues
//!
//! Neither of these is a heap. They trade one operation's cost for the other's
//! and exist as simple, obviously-correct references to check the heaps
//! against and to benchmark them relative to.
//!
//! # Time Complexity
//!
//! | Queue               | `insert` | `delete_extremum` | `peek` |
//! |---------------------|----------|-------------------|--------|
//! | `UnorderedArrayPQ`  | O(1)     | O(n)              | O(n)   |
//! | `OrderedArrayPQ`    | O(n)     | O(1)              | O(1)   |

use crate::order::{Compare, MaxOrder};
use crate::traits::PriorityQueue;

/// Appends on insert and scans for the extremum on removal
#[derive(Debug, Clone)]
pub struct UnorderedArrayPQ<T, C = MaxOrder> {
    items: Vec<T>,
    order: C,
}

impl<T, C: Compare<T> + Default> UnorderedArrayPQ<T, C> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::with_order(C::default())
    }
}

impl<T, C: Compare<T>> UnorderedArrayPQ<T, C> {
    /// Creates an empty queue ranked by `order`
    pub fn with_order(order: C) -> Self {
        Self {
            items: Vec::new(),
            order,
        }
    }

    /// Index of the extremum, or `None` when empty
    fn extremum_index(&self) -> Option<usize> {
        let mut best = 0;
        for i in 1..self.items.len() {
            if self.order.outranks(&self.items[i], &self.items[best]) {
                best = i;
            }
        }
        (!self.items.is_empty()).then_some(best)
    }
}

impl<T, C: Compare<T> + Default> Default for UnorderedArrayPQ<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for UnorderedArrayPQ<T, C> {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn peek(&self) -> Option<&T> {
        self.extremum_index().map(|i| &self.items[i])
    }

    fn insert(&mut self, value: T) {
        self.items.push(value);
    }

    fn delete_extremum(&mut self) -> Option<T> {
        let best = self.extremum_index()?;
        // Swap the extremum into the last slot and drop it
        Some(self.items.swap_remove(best))
    }
}

/// Keeps its elements sorted so the extremum is always last
#[derive(Debug, Clone)]
pub struct OrderedArrayPQ<T, C = MaxOrder> {
    items: Vec<T>,
    order: C,
}

impl<T, C: Compare<T> + Default> OrderedArrayPQ<T, C> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::with_order(C::default())
    }
}

impl<T, C: Compare<T>> OrderedArrayPQ<T, C> {
    /// Creates an empty queue ranked by `order`
    pub fn with_order(order: C) -> Self {
        Self {
            items: Vec::new(),
            order,
        }
    }
}

impl<T, C: Compare<T> + Default> Default for OrderedArrayPQ<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for OrderedArrayPQ<T, C> {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    fn insert(&mut self, value: T) {
        // Insertion sort step: shift every element ranked above `value` one slot right
        let mut i = self.items.len();
        self.items.push(value);
        while i > 0 && self.order.outranks(&self.items[i - 1], &self.items[i]) {
            self.items.swap(i - 1, i);
            i -= 1;
        }
    }

    fn delete_extremum(&mut self) -> Option<T> {
        self.items.pop()
    }
}
