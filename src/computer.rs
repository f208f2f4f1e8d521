//! Main sampling loop that ties everything together.
//!
//! [`CycleComputer`] owns the window timer, the speed/distance calculator and
//! the display presenter. The [`PulseCounter`] is *not* owned: it is shared
//! with the interrupt handler and passed in by reference.
//!
//! # Overview
//!
//! ```text
//! start()  probe display ── not found ──> DisplayNotFound (fatal)
//!            │
//!            └─ splash
//! step()   run window (5 s, LED/buzzer) ─> take pulses ─> compute ─> log ─> render ─> settle
//! run()    step() forever
//! ```
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
//! for t in 0..10 {
//!     counter.on_edge(t * 500);
//! }
//! let reading = computer.step(&counter).unwrap();
//! assert!((reading.speed_mph - 9.64).abs() < 0.01);
//! ```

use core::sync::atomic::{AtomicBool, Ordering};

use log::{debug, error, info, warn};

use crate::config::Config;
use crate::error::ComputerError;
use crate::presenter::DisplayPresenter;
use crate::pulse::PulseCounter;
use crate::traits::{Delay, DisplaySink, FeedbackOutput};
use crate::trip::{SpeedDistanceCalculator, TripReading, TripState};
use crate::window::SampleWindowTimer;

/// The bicycle computer main loop.
///
/// # Type Parameters
///
/// - `L`, `B`: status LED and buzzer ([`FeedbackOutput`])
/// - `D`: blocking delay ([`Delay`])
/// - `S`: display ([`DisplaySink`])
///
/// # Thread Safety
///
/// The computer runs on a single thread. The only state crossing into
/// interrupt context is the [`PulseCounter`], which is atomic.
pub struct CycleComputer<L, B, D, S>
where
    L: FeedbackOutput,
    B: FeedbackOutput,
    D: Delay,
    S: DisplaySink,
{
    config: Config,
    window: SampleWindowTimer<L, B, D>,
    calculator: SpeedDistanceCalculator,
    presenter: DisplayPresenter<S>,
    windows: u64,
}

impl<L, B, D, S> CycleComputer<L, B, D, S>
where
    L: FeedbackOutput,
    B: FeedbackOutput,
    D: Delay,
    S: DisplaySink,
    S::Error: core::fmt::Debug,
{
    /// Create a new computer with zeroed trip totals
    pub fn new(config: Config, led: L, buzzer: B, delay: D, display: S) -> Self {
        Self {
            window: SampleWindowTimer::new(config.window, led, buzzer, delay),
            calculator: SpeedDistanceCalculator::new(config.wheel),
            presenter: DisplayPresenter::new(display),
            windows: 0,
            config,
        }
    }

    /// Probe the display and show the splash screen.
    ///
    /// A missing display is fatal: callers must not enter the main loop
    /// after [`ComputerError::DisplayNotFound`].
    pub fn start(&mut self) -> Result<(), ComputerError<S::Error>> {
        if !self.presenter.probe() {
            error!("No I2C display found");
            return Err(ComputerError::DisplayNotFound);
        }
        self.presenter.splash()?;
        Ok(())
    }

    /// Run one full window: sample, compute, log, render, settle.
    ///
    /// The trip is updated before rendering, so a render failure never
    /// loses distance. The failure is still returned to the caller.
    pub fn step(&mut self, counter: &PulseCounter) -> Result<TripReading, ComputerError<S::Error>> {
        let sample = self.window.run_window(counter);
        let reading = self
            .calculator
            .compute(sample.pulses, sample.window_seconds);
        self.windows += 1;

        debug!(
            "window {} closed: {} pulses, {} rejected edges",
            self.windows, sample.pulses, sample.rejected
        );
        if reading.pulses > 0 {
            info!(
                "samples {}, pulses {}, pps {:.2}, speed {:.2} mph, total {:.4} mi",
                reading.window_seconds,
                reading.pulses,
                reading.pulses_per_second,
                reading.speed_mph,
                reading.total_distance_miles
            );
        }

        let rendered = self.presenter.render(&self.config.title, &reading);
        self.window.settle();
        rendered?;

        Ok(reading)
    }

    /// Run forever. Frame failures are logged and sampling continues.
    pub fn run(&mut self, counter: &PulseCounter) -> ! {
        loop {
            self.step_logged(counter);
        }
    }

    /// Run until `stop` is set. The flag is checked once per window boundary.
    ///
    /// Returns the number of windows completed by this call.
    pub fn run_until(&mut self, counter: &PulseCounter, stop: &AtomicBool) -> u64 {
        let mut completed = 0;
        while !stop.load(Ordering::Acquire) {
            self.step_logged(counter);
            completed += 1;
        }
        completed
    }

    fn step_logged(&mut self, counter: &PulseCounter) {
        if let Err(e) = self.step(counter) {
            warn!("Frame not shown: {}", e);
        }
    }

    /// Current trip totals
    pub fn trip(&self) -> &TripState {
        self.calculator.trip()
    }

    /// Number of windows completed since creation
    pub fn windows(&self) -> u64 {
        self.windows
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The display, for inspection
    pub fn display(&self) -> &S {
        self.presenter.sink()
    }

    /// The window timer, for inspection
    pub fn window(&self) -> &SampleWindowTimer<L, B, D> {
        &self.window
    }
}
