//! Fixed-cadence sampling window with LED/buzzer heartbeat.
//!
//! Each window is `sub_samples` one-second ticks. Every tick:
//!
//! ```text
//!  0ms        10ms                    500ms                   1000ms
//!  |  LED on  |        LED on         |         dark          |
//!  |  buzz    |                       |                       |
//! ```
//!
//! The window length used for speed is `sub_samples` seconds by
//! construction; scheduling jitter is not measured or compensated.
//!
//! # Example
//!
//! ```rust
//! use cycle_computer::{PulseCounter, SampleWindowConfig, SampleWindowTimer};
//! use cycle_computer::hal::{MockDelay, MockIndicator};
//!
//! let counter = PulseCounter::new(100);
//! let mut timer = SampleWindowTimer::new(
//!     SampleWindowConfig::default(),
//!     MockIndicator::new(),
//!     MockIndicator::new(),
//!     MockDelay::new(),
//! );
//!
//! counter.on_edge(0);
//! let sample = timer.run_window(&counter);
//! assert_eq!(sample.pulses, 1);
//! assert_eq!(sample.window_seconds, 5);
//! ```

use crate::pulse::PulseCounter;
use crate::traits::{Delay, FeedbackOutput};

/// Milliseconds in one sub-sample tick.
pub const SUB_SAMPLE_MS: u32 = 1_000;

/// Sampling window timing. Immutable once the timer is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleWindowConfig {
    /// Number of one-second ticks per window.
    pub sub_samples: u32,
    /// Buzzer chirp length at the start of each tick (LED also on).
    pub chirp_ms: u32,
    /// Time from chirp end until the LED turns off.
    pub lit_ms: u32,
    /// Pause after each render, outside the window.
    pub settle_ms: u32,
}

impl Default for SampleWindowConfig {
    fn default() -> Self {
        Self {
            sub_samples: 5,
            chirp_ms: 10,
            lit_ms: 490,
            settle_ms: 100,
        }
    }
}

impl SampleWindowConfig {
    /// Set the number of one-second ticks (minimum 1).
    pub fn with_sub_samples(mut self, sub_samples: u32) -> Self {
        self.sub_samples = sub_samples.max(1);
        self
    }

    /// Set the chirp and lit durations. Both are clamped so that a tick
    /// still totals exactly one second.
    pub fn with_pulse_shape(mut self, chirp_ms: u32, lit_ms: u32) -> Self {
        self.chirp_ms = chirp_ms.min(SUB_SAMPLE_MS);
        self.lit_ms = lit_ms.min(SUB_SAMPLE_MS - self.chirp_ms);
        self
    }

    /// Set the post-render pause.
    pub fn with_settle_ms(mut self, settle_ms: u32) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    /// Dark time at the end of each tick.
    #[inline]
    pub fn dark_ms(&self) -> u32 {
        SUB_SAMPLE_MS
            .saturating_sub(self.chirp_ms)
            .saturating_sub(self.lit_ms)
    }

    /// Window length in whole seconds, never less than one.
    #[inline]
    pub fn window_seconds(&self) -> u32 {
        self.sub_samples.max(1)
    }
}

/// Pulses collected over one closed window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSample {
    /// Pulses counted during the window.
    pub pulses: u32,
    /// Edges rejected by debounce during the window.
    pub rejected: u32,
    /// Window length in seconds (the divisor for speed).
    pub window_seconds: u32,
}

/// Drives the sampling window and the LED/buzzer heartbeat.
///
/// # Type Parameters
///
/// - `L`: status LED ([`FeedbackOutput`])
/// - `B`: buzzer ([`FeedbackOutput`])
/// - `D`: blocking delay ([`Delay`])
pub struct SampleWindowTimer<L, B, D>
where
    L: FeedbackOutput,
    B: FeedbackOutput,
    D: Delay,
{
    config: SampleWindowConfig,
    led: L,
    buzzer: B,
    delay: D,
}

impl<L, B, D> SampleWindowTimer<L, B, D>
where
    L: FeedbackOutput,
    B: FeedbackOutput,
    D: Delay,
{
    /// Creates a timer; both outputs are driven off immediately.
    pub fn new(config: SampleWindowConfig, mut led: L, mut buzzer: B, delay: D) -> Self {
        led.off();
        buzzer.off();
        Self {
            config,
            led,
            buzzer,
            delay,
        }
    }

    /// Runs one full window, then reads-and-resets the pulse counter.
    ///
    /// Blocks for [`window_seconds`](SampleWindowConfig::window_seconds)
    /// seconds. Pulses keep accumulating in `counter` from interrupt context
    /// while this sleeps.
    pub fn run_window(&mut self, counter: &PulseCounter) -> WindowSample {
        for _ in 0..self.config.window_seconds() {
            self.tick();
        }

        WindowSample {
            pulses: counter.take(),
            rejected: counter.take_rejected(),
            window_seconds: self.config.window_seconds(),
        }
    }

    /// Sleeps for the post-render settle pause.
    pub fn settle(&mut self) {
        if self.config.settle_ms > 0 {
            self.delay.delay_ms(self.config.settle_ms);
        }
    }

    fn tick(&mut self) {
        self.led.on();
        self.buzzer.on();
        self.delay.delay_ms(self.config.chirp_ms);
        self.buzzer.off();
        self.delay.delay_ms(self.config.lit_ms);
        self.led.off();
        self.delay.delay_ms(self.config.dark_ms());
    }

    /// Window timing in use.
    pub fn config(&self) -> &SampleWindowConfig {
        &self.config
    }

    /// Status LED, for inspection.
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Buzzer, for inspection.
    pub fn buzzer(&self) -> &B {
        &self.buzzer
    }

    /// Delay source, for inspection.
    pub fn delay(&self) -> &D {
        &self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::{MockDelay, MockIndicator};

    fn timer(config: SampleWindowConfig) -> SampleWindowTimer<MockIndicator, MockIndicator, MockDelay> {
        SampleWindowTimer::new(
            config,
            MockIndicator::new(),
            MockIndicator::new(),
            MockDelay::new(),
        )
    }

    // =========================================================================
    // SampleWindowConfig Tests
    // =========================================================================

    #[test]
    fn default_config() {
        let config = SampleWindowConfig::default();
        assert_eq!(config.sub_samples, 5);
        assert_eq!(config.chirp_ms, 10);
        assert_eq!(config.lit_ms, 490);
        assert_eq!(config.dark_ms(), 500);
        assert_eq!(config.settle_ms, 100);
        assert_eq!(config.window_seconds(), 5);
    }

    #[test]
    fn tick_totals_one_second() {
        let config = SampleWindowConfig::default();
        assert_eq!(config.chirp_ms + config.lit_ms + config.dark_ms(), 1_000);
    }

    #[test]
    fn zero_sub_samples_clamped() {
        let config = SampleWindowConfig::default().with_sub_samples(0);
        assert_eq!(config.sub_samples, 1);
    }

    #[test]
    fn literal_zero_sub_samples_still_one_second() {
        let config = SampleWindowConfig {
            sub_samples: 0,
            ..SampleWindowConfig::default()
        };
        assert_eq!(config.window_seconds(), 1);

        let mut timer = timer(config);
        let counter = PulseCounter::new(100);
        counter.on_edge(0);
        let sample = timer.run_window(&counter);

        assert_eq!(sample.window_seconds, 1);
        assert_eq!(sample.pulses, 1);
        assert_eq!(timer.delay().total_ms, 1_000);
        assert_eq!(timer.led().pulses, 1);
    }

    #[test]
    fn pulse_shape_clamped_to_one_second() {
        let config = SampleWindowConfig::default().with_pulse_shape(200, 2_000);
        assert_eq!(config.chirp_ms, 200);
        assert_eq!(config.lit_ms, 800);
        assert_eq!(config.dark_ms(), 0);
    }

    // =========================================================================
    // SampleWindowTimer Tests
    // =========================================================================

    #[test]
    fn window_sleeps_exactly_window_seconds() {
        let mut timer = timer(SampleWindowConfig::default());
        let counter = PulseCounter::new(100);
        timer.run_window(&counter);
        assert_eq!(timer.delay().total_ms, 5_000);
    }

    #[test]
    fn heartbeat_once_per_tick() {
        let mut timer = timer(SampleWindowConfig::default().with_sub_samples(3));
        let counter = PulseCounter::new(100);
        timer.run_window(&counter);

        assert_eq!(timer.led().pulses, 3);
        assert_eq!(timer.buzzer().pulses, 3);
        assert!(!timer.led().active);
        assert!(!timer.buzzer().active);
    }

    #[test]
    fn outputs_off_after_construction() {
        let timer = timer(SampleWindowConfig::default());
        assert!(!timer.led().active);
        assert!(!timer.buzzer().active);
        assert_eq!(timer.led().pulses, 0);
    }

    #[test]
    fn window_reads_and_resets_counter() {
        let mut timer = timer(SampleWindowConfig::default());
        let counter = PulseCounter::new(100);
        counter.on_edge(0);
        counter.on_edge(300);
        counter.on_edge(310); // bounce

        let sample = timer.run_window(&counter);
        assert_eq!(sample.pulses, 2);
        assert_eq!(sample.rejected, 1);
        assert_eq!(sample.window_seconds, 5);

        let sample = timer.run_window(&counter);
        assert_eq!(sample.pulses, 0);
        assert_eq!(sample.rejected, 0);
    }

    #[test]
    fn settle_sleeps_configured_pause() {
        let mut timer = timer(SampleWindowConfig::default());
        timer.settle();
        assert_eq!(timer.delay().total_ms, 100);

        let mut timer = self::timer(SampleWindowConfig::default().with_settle_ms(0));
        timer.settle();
        assert_eq!(timer.delay().total_ms, 0);
        assert!(timer.delay().calls.is_empty());
    }
}
