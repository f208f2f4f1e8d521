//! Mock implementations for testing without hardware.
//!
//! This module provides test doubles for all hardware traits, enabling
//! development and testing on desktop without a bike, a reed switch or
//! an OLED.
//!
//! # Available Mocks
//!
//! | Mock | Trait | Purpose |
//! |------|-------|---------|
//! | [`MockClock`] | [`Clock`] | Controllable, shareable time source |
//! | [`MockDelay`] | [`Delay`] | Records sleeps, optional per-sleep hook |
//! | [`MockIndicator`] | [`FeedbackOutput`] | Tracks LED/buzzer level and pulses |
//! | [`MockDisplay`] | [`DisplaySink`] | Records every drawing operation |
//!
//! # Example
//!
//! ```rust
//! use cycle_computer::{CycleComputer, Config, PulseCounter};
//! use cycle_computer::hal::{MockDelay, MockDisplay, MockIndicator};
//!
//! let counter = PulseCounter::new(100);
//! let mut computer = CycleComputer::new(
//!     Config::default(),
//!     MockIndicator::new(),
//!     MockIndicator::new(),
//!     MockDelay::new(),
//!     MockDisplay::new(),
//! );
//! computer.start().unwrap();
//!
//! counter.on_edge(0);
//! let reading = computer.step(&counter).unwrap();
//! assert_eq!(reading.pulses, 1);
//! assert!(computer.display().has_text("MPH"));
//! ```
//!
//! [`Clock`]: crate::traits::Clock
//! [`Delay`]: crate::traits::Delay
//! [`FeedbackOutput`]: crate::traits::FeedbackOutput
//! [`DisplaySink`]: crate::traits::DisplaySink

extern crate alloc;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU64, Ordering};

use crate::traits::{Clock, Delay, DisplaySink, FeedbackOutput};

// ============================================================================
// Hardware Mocks
// ============================================================================

/// Mock clock for testing.
///
/// Time is stored atomically so one clock can be shared (via `Arc` or a
/// `static`) between a simulated interrupt thread and the test body.
///
/// # Example
///
/// ```rust
/// use cycle_computer::hal::MockClock;
/// use cycle_computer::traits::Clock;
///
/// let clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.set(1000);
/// assert_eq!(clock.now_ms(), 1000);
///
/// clock.advance(500);
/// assert_eq!(clock.now_ms(), 1500);
/// ```
#[derive(Debug, Default)]
pub struct MockClock {
    current_ms: AtomicU64,
}

impl MockClock {
    /// Creates a new mock clock starting at 0ms.
    pub const fn new() -> Self {
        Self {
            current_ms: AtomicU64::new(0),
        }
    }

    /// Sets the current time in milliseconds.
    pub fn set(&self, ms: u64) {
        self.current_ms.store(ms, Ordering::SeqCst);
    }

    /// Advances the clock by the given duration.
    pub fn advance(&self, ms: u64) {
        self.current_ms.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.current_ms.load(Ordering::SeqCst)
    }
}

/// Callback run on every [`MockDelay::delay_ms`] call.
pub type DelayHook = Box<dyn FnMut(u32)>;

/// Mock blocking delay.
///
/// Returns immediately, recording each requested sleep. An optional hook
/// runs on every sleep, which is how tests inject wheel pulses "while the
/// window is sleeping".
///
/// # Example
///
/// ```rust
/// use cycle_computer::hal::MockDelay;
/// use cycle_computer::traits::Delay;
///
/// let mut delay = MockDelay::new();
/// delay.delay_ms(10);
/// delay.delay_ms(490);
///
/// assert_eq!(delay.calls, vec![10, 490]);
/// assert_eq!(delay.total_ms, 500);
/// ```
#[derive(Default)]
pub struct MockDelay {
    /// Every requested sleep, in order.
    pub calls: Vec<u32>,
    /// Sum of all requested sleeps.
    pub total_ms: u64,
    hook: Option<DelayHook>,
}

impl MockDelay {
    /// Creates a new mock delay with no hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `hook(ms)` on every sleep.
    pub fn with_hook(mut self, hook: impl FnMut(u32) + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }
}

impl core::fmt::Debug for MockDelay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MockDelay")
            .field("calls", &self.calls)
            .field("total_ms", &self.total_ms)
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

impl Delay for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(ms);
        self.total_ms += ms as u64;
        if let Some(hook) = self.hook.as_mut() {
            hook(ms);
        }
    }
}

/// Mock LED or buzzer.
///
/// # Example
///
/// ```rust
/// use cycle_computer::hal::MockIndicator;
/// use cycle_computer::traits::FeedbackOutput;
///
/// let mut led = MockIndicator::new();
/// led.on();
/// led.on(); // already on, not a new pulse
/// led.off();
///
/// assert_eq!(led.pulses, 1);
/// assert_eq!(led.writes, 3);
/// assert!(!led.active);
/// ```
#[derive(Debug, Default)]
pub struct MockIndicator {
    /// Current output level.
    pub active: bool,
    /// Number of off-to-on transitions.
    pub pulses: usize,
    /// Number of writes of any kind.
    pub writes: usize,
}

impl MockIndicator {
    /// Creates a new mock output, initially off.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeedbackOutput for MockIndicator {
    fn set_active(&mut self, active: bool) {
        if active && !self.active {
            self.pulses += 1;
        }
        self.active = active;
        self.writes += 1;
    }
}

// ============================================================================
// Display Mocks
// ============================================================================

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayOp {
    /// `clear()`
    Clear,
    /// `draw_text()`
    Text {
        /// Text drawn.
        text: String,
        /// Left edge.
        x: i32,
        /// Top edge.
        y: i32,
    },
    /// `draw_bitmap()`; only the buffer length is kept.
    Bitmap {
        /// Buffer length in bytes.
        len: usize,
        /// Left edge.
        x: i32,
        /// Top edge.
        y: i32,
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// `present()`
    Present,
}

/// Mock display for testing UI rendering.
///
/// Records every operation since the last `clear()` in [`ops`](Self::ops),
/// and counts presents across the whole test.
///
/// # Example
///
/// ```
/// use cycle_computer::hal::MockDisplay;
/// use cycle_computer::traits::DisplaySink;
///
/// let mut display = MockDisplay::new();
/// assert!(display.probe());
///
/// display.clear().unwrap();
/// display.draw_text("MPH", 10, 40).unwrap();
/// display.present().unwrap();
///
/// assert!(display.has_text("MPH"));
/// assert_eq!(display.present_count, 1);
///
/// let mut missing = MockDisplay::missing();
/// assert!(!missing.probe());
/// ```
#[derive(Debug)]
pub struct MockDisplay {
    /// Operations recorded since the last `clear()`.
    pub ops: Vec<DisplayOp>,
    /// Whether `probe()` finds a device.
    pub found: bool,
    /// Number of times `probe()` was called.
    pub probe_count: usize,
    /// Number of times `present()` was called.
    pub present_count: usize,
    /// Makes `present()` fail, to exercise error paths.
    pub fail_present: bool,
}

impl Default for MockDisplay {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            found: true,
            probe_count: 0,
            present_count: 0,
            fail_present: false,
        }
    }
}

impl MockDisplay {
    /// Creates a new mock display that answers the probe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock display that is absent from the bus.
    pub fn missing() -> Self {
        Self {
            found: false,
            ..Self::default()
        }
    }

    /// Text operations of the current frame as `(text, x, y)`.
    pub fn texts(&self) -> Vec<(&str, i32, i32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DisplayOp::Text { text, x, y } => Some((text.as_str(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Whether the current frame contains `text` anywhere.
    pub fn has_text(&self, text: &str) -> bool {
        self.texts().iter().any(|(t, _, _)| *t == text)
    }
}

impl DisplaySink for MockDisplay {
    type Error = ();

    fn probe(&mut self) -> bool {
        self.probe_count += 1;
        self.found
    }

    fn clear(&mut self) -> Result<(), ()> {
        self.ops.clear();
        self.ops.push(DisplayOp::Clear);
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), ()> {
        self.ops.push(DisplayOp::Text {
            text: text.into(),
            x,
            y,
        });
        Ok(())
    }

    fn draw_bitmap(
        &mut self,
        buffer: &[u8],
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    ) -> Result<(), ()> {
        self.ops.push(DisplayOp::Bitmap {
            len: buffer.len(),
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn present(&mut self) -> Result<(), ()> {
        if self.fail_present {
            return Err(());
        }
        self.ops.push(DisplayOp::Present);
        self.present_count += 1;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    // =========================================================================
    // MockClock Tests
    // =========================================================================

    #[test]
    fn mock_clock_default() {
        let clock = MockClock::new();
        assert_eq!(clock.now_ms(), 0);
    }

    #[test]
    fn mock_clock_set_and_advance() {
        let clock = MockClock::new();
        clock.set(1000);
        clock.advance(250);
        assert_eq!(clock.now_ms(), 1250);
    }

    // =========================================================================
    // MockDelay Tests
    // =========================================================================

    #[test]
    fn mock_delay_records_calls() {
        let mut delay = MockDelay::new();
        delay.delay_ms(10);
        delay.delay_ms(500);
        assert_eq!(delay.calls, vec![10, 500]);
        assert_eq!(delay.total_ms, 510);
    }

    #[test]
    fn mock_delay_hook_runs_per_call() {
        let slept = Rc::new(Cell::new(0u32));
        let seen = slept.clone();
        let mut delay = MockDelay::new().with_hook(move |ms| seen.set(seen.get() + ms));

        delay.delay_ms(10);
        delay.delay_ms(490);
        assert_eq!(slept.get(), 500);
    }

    #[test]
    fn mock_delay_debug_hides_hook() {
        let delay = MockDelay::new().with_hook(|_| {});
        let text = format!("{:?}", delay);
        assert!(text.contains("hook: true"));
    }

    // =========================================================================
    // MockIndicator Tests
    // =========================================================================

    #[test]
    fn mock_indicator_counts_rising_writes() {
        let mut led = MockIndicator::new();
        led.on();
        led.off();
        led.on();
        led.off();
        assert_eq!(led.pulses, 2);
        assert_eq!(led.writes, 4);
    }

    // =========================================================================
    // MockDisplay Tests
    // =========================================================================

    #[test]
    fn mock_display_default() {
        let display = MockDisplay::new();
        assert!(display.ops.is_empty());
        assert!(display.found);
        assert_eq!(display.present_count, 0);
    }

    #[test]
    fn mock_display_probe_missing() {
        let mut display = MockDisplay::missing();
        assert!(!display.probe());
        assert_eq!(display.probe_count, 1);
    }

    #[test]
    fn mock_display_clear_starts_new_frame() {
        let mut display = MockDisplay::new();
        display.draw_text("old", 0, 0).unwrap();
        display.clear().unwrap();
        display.draw_text("new", 0, 0).unwrap();

        assert!(!display.has_text("old"));
        assert!(display.has_text("new"));
        assert_eq!(display.ops[0], DisplayOp::Clear);
    }

    #[test]
    fn mock_display_fail_present() {
        let mut display = MockDisplay::new();
        display.fail_present = true;
        assert!(display.present().is_err());
        assert_eq!(display.present_count, 0);
    }
}
