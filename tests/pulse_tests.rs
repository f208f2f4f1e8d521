//! Integration tests for the shared pulse counter

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

use cycle_computer::hal::MockClock;
use cycle_computer::traits::Clock;
use cycle_computer::PulseCounter;

// ============================================================================
// Debounce
// ============================================================================

#[test]
fn two_edges_10ms_apart_count_once() {
    let counter = PulseCounter::new(100);
    let clock = MockClock::new();
    clock.set(10_000);

    counter.on_edge(clock.now_ms());
    clock.advance(10);
    counter.on_edge(clock.now_ms());

    assert_eq!(counter.take(), 1);
}

#[test]
fn bouncy_switch_counts_one_per_revolution() {
    // Every revolution closes the switch with 4 bounces over 30ms
    let counter = PulseCounter::new(100);
    let clock = MockClock::new();

    for _ in 0..20 {
        for _ in 0..5 {
            counter.on_edge(clock.now_ms());
            clock.advance(6);
        }
        clock.advance(470);
    }

    assert_eq!(counter.take(), 20);
    assert_eq!(counter.take_rejected(), 80);
}

#[test]
fn fast_cadence_above_debounce_is_not_lost() {
    // ~9 Hz wheel, far faster than any rider
    let counter = PulseCounter::new(100);
    for i in 0..90u64 {
        counter.on_edge(i * 110);
    }
    assert_eq!(counter.take(), 90);
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn concurrent_increments_and_resets_lose_nothing() {
    const EDGES: u64 = 200_000;

    // Zero debounce: every edge must be counted exactly once
    let counter = Arc::new(PulseCounter::new(0));
    let done = Arc::new(AtomicBool::new(false));

    let isr = {
        let counter = counter.clone();
        let done = done.clone();
        thread::spawn(move || {
            for t in 0..EDGES {
                assert!(counter.on_edge(t));
            }
            done.store(true, Ordering::Release);
        })
    };

    let mut total: u64 = 0;
    let mut resets = 0u32;
    loop {
        let finished = done.load(Ordering::Acquire);
        total += counter.take() as u64;
        resets += 1;
        if finished {
            break;
        }
        thread::yield_now();
    }
    isr.join().unwrap();

    assert_eq!(total, EDGES);
    assert!(resets > 0);
}

#[test]
fn accepted_edges_match_count_across_threads() {
    // Two edge sources racing on the same timestamps
    const SLOTS: u64 = 5_000;
    let counter = Arc::new(PulseCounter::new(100));
    let accepted = Arc::new(AtomicU64::new(0));

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let counter = counter.clone();
            let accepted = accepted.clone();
            thread::spawn(move || {
                for slot in 0..SLOTS {
                    if counter.on_edge(slot * 100) {
                        accepted.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.take() as u64, accepted.load(Ordering::Relaxed));
}
