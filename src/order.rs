//! Ordering relations used to rank priorities
//!
//! Every heap in this crate is parameterized by a [`Compare`] implementation.
//! The element that compares *greatest* under it sits at the root, so:
//!
//! - [`MaxOrder`] (natural order) yields a max-heap
//! - [`MinOrder`] (reversed natural order) yields a min-heap
//! - [`FnOrder`] wraps an arbitrary comparator closure
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queues::order::{Compare, FnOrder, MaxOrder, MinOrder};
//! use std::cmp::Ordering;
//!
//! assert_eq!(MaxOrder.compare(&3, &1), Ordering::Greater);
//! assert_eq!(MinOrder.compare(&3, &1), Ordering::Less);
//!
//! // Rank strings by length
//! let by_len = FnOrder::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! assert!(by_len.outranks(&"three", &"one"));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A total order over `T` deciding which element belongs closer to the root
pub trait Compare<T: ?Sized> {
    /// Compares two elements; `Greater` means `a` belongs above `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` must sit strictly above `b`
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

/// Natural ascending order: the largest element is the extremum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Compare<T> for MaxOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Natural descending order: the smallest element is the extremum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T: Ord + ?Sized> Compare<T> for MinOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Custom comparator backed by a closure
#[derive(Clone, Copy)]
pub struct FnOrder<F>(F);

impl<F> FnOrder<F> {
    /// Wraps `f`; the element `f` ranks greatest becomes the extremum
    pub fn new(f: F) -> Self {
        FnOrder(f)
    }
}

impl<F> fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnOrder(..)")
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Compare<T> for FnOrder<F> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}
