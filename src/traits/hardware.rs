//! Hardware abstraction traits for timing and feedback outputs.
//!
//! This module defines the hardware interfaces the sampling loop needs so that
//! the cycle computer runs the same way on an ESP32 and inside desktop tests.
//!
//! # Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Clock`] | Millisecond time source for edge timestamps |
//! | [`Delay`] | Blocking sleep for the sampling window |
//! | [`FeedbackOutput`] | LED / buzzer driven on the sample cadence |
//!
//! # Implementation
//!
//! For testing and desktop development, use the mock implementations
//! from [`crate::hal::mock`]. For ESP32 hardware, use the
//! implementations from `hal::esp32` (requires `esp32` feature).
//!
//! # Example
//!
//! ```rust
//! use cycle_computer::traits::{FeedbackOutput, Delay};
//! use cycle_computer::hal::{MockIndicator, MockDelay};
//!
//! let mut led = MockIndicator::new();
//! let mut delay = MockDelay::new();
//!
//! led.set_active(true);
//! delay.delay_ms(10);
//! led.set_active(false);
//!
//! assert_eq!(led.pulses, 1);
//! assert_eq!(delay.total_ms, 10);
//! ```

/// Time source trait for `no_std` compatibility.
///
/// Provides monotonic time in milliseconds. Edge timestamps are taken
/// from this inside the interrupt handler, so implementations must be
/// safe to call from interrupt context.
///
/// # Example
///
/// ```rust
/// use cycle_computer::traits::Clock;
/// use cycle_computer::hal::MockClock;
///
/// let clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.advance(100);
/// assert_eq!(clock.now_ms(), 100);
/// ```
pub trait Clock {
    /// Returns current time in milliseconds since an arbitrary epoch.
    ///
    /// Must be monotonically increasing.
    fn now_ms(&self) -> u64;
}

/// Blocking delay used by the sampling window.
///
/// The sub-sample sleeps are the only intentional suspension points of
/// the main loop.
pub trait Delay {
    /// Block the calling thread for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// A digital feedback output (status LED or piezo buzzer).
///
/// Driven high/low on a fixed schedule by the sampling window. Writes to
/// an already-configured GPIO cannot meaningfully fail, so this trait is
/// infallible.
pub trait FeedbackOutput {
    /// Drive the output on (`true`) or off (`false`).
    fn set_active(&mut self, active: bool);

    /// Convenience for `set_active(true)`.
    fn on(&mut self) {
        self.set_active(true);
    }

    /// Convenience for `set_active(false)`.
    fn off(&mut self) {
        self.set_active(false);
    }
}
