//! Complexity checks by counting comparator calls
//!
//! Wall-clock measurements are noisy, so these tests count how many times the
//! ordering relation is consulted and compare that against the textbook
//! bounds. Counts are deterministic for a given input.
//!
//! Skipped under `invariant-checks`, whose per-mutation order checks consult
//! the same comparator.

#![cfg(not(feature = "invariant-checks"))]

use std::cell::Cell;

use rust_priority_queues::binary::BinaryHeapPQ;
use rust_priority_queues::indexed::IndexedHeap;
use rust_priority_queues::sort::heap_sort_by;
use rust_priority_queues::{FnOrder, PriorityQueue};

/// Deterministic pseudo-random input, so counts do not depend on a seed crate
fn scrambled(n: usize) -> Vec<u64> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            state >> 33
        })
        .collect()
}

fn log2(n: usize) -> f64 {
    (n as f64).log2()
}

/// Bottom-up heapify must stay linear: at most 2n comparisons
#[test]
fn test_heapify_is_linear() {
    for n in [16usize, 1_000, 10_000, 100_000] {
        let calls = Cell::new(0usize);
        let order = FnOrder::new(|a: &u64, b: &u64| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        });

        let heap = BinaryHeapPQ::from_vec_with_order(scrambled(n), order);
        assert_eq!(heap.len(), n);
        assert!(
            calls.get() <= 2 * n,
            "heapify of {} elements used {} comparisons",
            n,
            calls.get()
        );
    }
}

/// Heapsort stays within 2n log2 n comparisons
#[test]
fn test_heap_sort_is_n_log_n() {
    for n in [16usize, 1_000, 10_000, 100_000] {
        let calls = Cell::new(0usize);
        let mut values = scrambled(n);
        heap_sort_by(&mut values, |a, b| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        });

        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        let bound = 2.0 * n as f64 * log2(n) + 2.0 * n as f64;
        assert!(
            (calls.get() as f64) <= bound,
            "heapsort of {} elements used {} comparisons (bound {})",
            n,
            calls.get(),
            bound
        );
    }
}

/// A single insert or delete-extremum touches O(log n) slots
#[test]
fn test_single_operations_are_logarithmic() {
    let n = 1 << 16;
    let calls = Cell::new(0usize);
    let order = FnOrder::new(|a: &u64, b: &u64| {
        calls.set(calls.get() + 1);
        a.cmp(b)
    });
    let mut heap = BinaryHeapPQ::from_vec_with_order(scrambled(n), order);

    calls.set(0);
    heap.insert(u64::MAX);
    assert!(calls.get() <= 17, "insert used {} comparisons", calls.get());

    calls.set(0);
    assert_eq!(heap.delete_extremum(), Some(u64::MAX));
    assert!(
        calls.get() <= 2 * 17,
        "delete_extremum used {} comparisons",
        calls.get()
    );
}

/// Arbitrary-key updates on the indexed heap are O(log n) too
#[test]
fn test_indexed_updates_are_logarithmic() {
    let n = 1 << 14;
    let calls = Cell::new(0usize);
    let order = FnOrder::new(|a: &u64, b: &u64| {
        calls.set(calls.get() + 1);
        b.cmp(a)
    });
    let pairs = scrambled(n).into_iter().enumerate();
    let mut heap = IndexedHeap::from_pairs_with_order(n, pairs, order).unwrap();
    assert!(calls.get() <= 2 * n);

    for key in [0, n / 3, n - 1] {
        calls.set(0);
        heap.change_priority(key, 0).unwrap();
        // One comparison to swim past each ancestor, plus the sink probe
        assert!(calls.get() <= 15 + 2, "change_priority used {}", calls.get());

        calls.set(0);
        heap.delete_key(key).unwrap();
        assert!(calls.get() <= 2 * 15 + 2, "delete_key used {}", calls.get());
    }

    assert!(heap.is_consistent());
}
