//! Interrupt-driven wheel pulse counter with timestamp debounce.
//!
//! [`PulseCounter`] is the only state shared between the reed-switch
//! interrupt and the main sampling loop. Everything in it is atomic:
//!
//! - [`on_edge`](PulseCounter::on_edge) runs in interrupt context. It never
//!   sleeps and never disarms edge detection; bounce is rejected by comparing
//!   the edge timestamp with the last accepted one.
//! - [`take`](PulseCounter::take) runs in the main loop at window close and
//!   reads-and-zeroes the count with a single atomic swap, so an edge landing
//!   between "read" and "reset" is never lost or counted twice.
//!
//! # Example
//!
//! ```rust
//! use cycle_computer::PulseCounter;
//!
//! static COUNTER: PulseCounter = PulseCounter::new(100);
//!
//! // Interrupt side
//! assert!(COUNTER.on_edge(1_000));
//! assert!(!COUNTER.on_edge(1_010)); // bounce, 10ms later
//! assert!(COUNTER.on_edge(1_400));
//!
//! // Main loop side
//! assert_eq!(COUNTER.take(), 2);
//! assert_eq!(COUNTER.take(), 0);
//! ```

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Default debounce interval in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u32 = 100;

/// Shared wheel-rotation counter.
///
/// Designed to live in a `static` (see [`new`](Self::new), which is `const`)
/// and be handed to both the interrupt registration and the main loop as
/// `&'static PulseCounter`.
///
/// Timestamps are truncated to a wrapping `u32` millisecond clock; elapsed
/// time is computed with wrapping subtraction, so the counter keeps working
/// across the ~49 day rollover.
#[derive(Debug)]
pub struct PulseCounter {
    /// Pulses accepted since the last `take()`.
    count: AtomicU32,
    /// Edges rejected by debounce since the last `take_rejected()`.
    rejected: AtomicU32,
    /// Timestamp (ms, wrapping) of the last accepted edge.
    last_accepted_ms: AtomicU32,
    /// Whether any edge has been accepted yet.
    primed: AtomicBool,
    /// Minimum spacing between accepted edges.
    debounce_ms: u32,
}

impl PulseCounter {
    /// Creates an empty counter with the given debounce interval.
    pub const fn new(debounce_ms: u32) -> Self {
        Self {
            count: AtomicU32::new(0),
            rejected: AtomicU32::new(0),
            last_accepted_ms: AtomicU32::new(0),
            primed: AtomicBool::new(false),
            debounce_ms,
        }
    }

    /// Handles one rising edge observed at `now_ms`.
    ///
    /// Counts the edge iff at least `debounce_ms` elapsed since the last
    /// accepted edge (the very first edge is always accepted). Returns
    /// whether the edge was counted.
    ///
    /// Safe to call from interrupt context: lock-free, no allocation,
    /// never blocks.
    pub fn on_edge(&self, now_ms: u64) -> bool {
        let now = now_ms as u32;

        if self.primed.load(Ordering::Acquire) {
            let last = self.last_accepted_ms.load(Ordering::Acquire);
            if now.wrapping_sub(last) < self.debounce_ms {
                self.rejected.fetch_add(1, Ordering::Relaxed);
                return false;
            }
            // Another context may have accepted an edge since the load
            if self
                .last_accepted_ms
                .compare_exchange(last, now, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
            {
                self.rejected.fetch_add(1, Ordering::Relaxed);
                return false;
            }
        } else {
            self.last_accepted_ms.store(now, Ordering::Release);
            self.primed.store(true, Ordering::Release);
        }

        self.count.fetch_add(1, Ordering::AcqRel);
        true
    }

    /// Reads the accumulated count and resets it to zero atomically.
    pub fn take(&self) -> u32 {
        self.count.swap(0, Ordering::AcqRel)
    }

    /// Returns the accumulated count without resetting it.
    #[inline]
    pub fn peek(&self) -> u32 {
        self.count.load(Ordering::Acquire)
    }

    /// Reads and resets the number of edges rejected by debounce.
    pub fn take_rejected(&self) -> u32 {
        self.rejected.swap(0, Ordering::AcqRel)
    }

    /// Returns the configured debounce interval in milliseconds.
    #[inline]
    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }
}

impl Default for PulseCounter {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Debounce Tests
    // =========================================================================

    #[test]
    fn first_edge_always_counts() {
        let counter = PulseCounter::new(100);
        assert!(counter.on_edge(0));
        assert_eq!(counter.peek(), 1);
    }

    #[test]
    fn edge_within_debounce_is_rejected() {
        let counter = PulseCounter::new(100);
        assert!(counter.on_edge(5_000));
        assert!(!counter.on_edge(5_010));
        assert_eq!(counter.take(), 1);
        assert_eq!(counter.take_rejected(), 1);
    }

    #[test]
    fn edge_at_exact_debounce_counts() {
        let counter = PulseCounter::new(100);
        assert!(counter.on_edge(5_000));
        assert!(counter.on_edge(5_100));
        assert_eq!(counter.take(), 2);
    }

    #[test]
    fn debounce_measured_from_accepted_edge() {
        // A burst of bounces does not keep pushing the window forward
        let counter = PulseCounter::new(100);
        assert!(counter.on_edge(0));
        assert!(!counter.on_edge(40));
        assert!(!counter.on_edge(80));
        assert!(counter.on_edge(100));
        assert_eq!(counter.take(), 2);
        assert_eq!(counter.take_rejected(), 2);
    }

    #[test]
    fn clock_wraparound() {
        let counter = PulseCounter::new(100);
        let near_wrap = u32::MAX as u64 - 20;
        assert!(counter.on_edge(near_wrap));
        // 30ms later, past the u32 rollover
        assert!(!counter.on_edge(near_wrap + 30));
        assert!(counter.on_edge(near_wrap + 150));
        assert_eq!(counter.take(), 2);
    }

    #[test]
    fn zero_debounce_counts_every_edge() {
        let counter = PulseCounter::new(0);
        for t in 0..10 {
            assert!(counter.on_edge(t));
        }
        assert_eq!(counter.take(), 10);
    }

    // =========================================================================
    // Read-Reset Tests
    // =========================================================================

    #[test]
    fn take_resets_count() {
        let counter = PulseCounter::new(100);
        counter.on_edge(0);
        counter.on_edge(200);
        counter.on_edge(400);

        assert_eq!(counter.take(), 3);
        assert_eq!(counter.take(), 0);
        assert_eq!(counter.peek(), 0);
    }

    #[test]
    fn take_does_not_reset_debounce_window() {
        let counter = PulseCounter::new(100);
        counter.on_edge(1_000);
        assert_eq!(counter.take(), 1);

        // Bounce of the edge that was just taken
        assert!(!counter.on_edge(1_050));
        assert_eq!(counter.take(), 0);
    }

    #[test]
    fn default_uses_100ms_debounce() {
        let counter = PulseCounter::default();
        assert_eq!(counter.debounce_ms(), DEFAULT_DEBOUNCE_MS);
        assert_eq!(counter.debounce_ms(), 100);
    }

    #[test]
    fn usable_as_static() {
        static COUNTER: PulseCounter = PulseCounter::new(100);
        COUNTER.on_edge(0);
        assert_eq!(COUNTER.take(), 1);
    }
}
