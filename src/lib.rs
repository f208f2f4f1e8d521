//! # cycle-computer
//!
//! A bicycle speed/distance computer: a reed switch on the fork pulses once
//! per wheel revolution, the pulses are counted from an interrupt, and every
//! five seconds the count becomes a speed and a running distance on a small
//! I2C OLED.
//!
//! ## Features
//!
//! - **Interrupt-safe pulse counting**: lock-free increment, atomic read-and-reset
//! - **Non-blocking debounce**: timestamp comparison, never sleeps in the ISR
//! - **Fixed sampling window**: five one-second ticks with LED/buzzer heartbeat
//! - **Full-precision distance**: rounding only at the display
//! - **Hardware abstraction**: traits with desktop mocks and ESP32 drivers
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `traits` - Hardware abstractions (clock, delay, feedback pins, display)
//! - `pulse` - Shared wheel pulse counter
//! - `window` - Sampling window and heartbeat
//! - `trip` - Speed and distance calculation
//! - `presenter` - Screen layout
//! - `computer` - Main loop that ties everything together
//! - `hal` - Concrete implementations (mock for testing, esp32 for hardware)
//!
//! ## Example
//!
//! ```rust
//! use cycle_computer::{CycleComputer, Config, PulseCounter};
//! use cycle_computer::hal::{MockDelay, MockDisplay, MockIndicator};
//!
//! // Shared with the reed-switch interrupt on real hardware
//! static WHEEL: PulseCounter = PulseCounter::new(100);
//!
//! let mut computer = CycleComputer::new(
//!     Config::default(),
//!     MockIndicator::new(), // LED
//!     MockIndicator::new(), // buzzer
//!     MockDelay::new(),
//!     MockDisplay::new(),
//! );
//! computer.start().unwrap();
//!
//! // Interrupt side: two wheel revolutions
//! WHEEL.on_edge(0);
//! WHEEL.on_edge(450);
//!
//! // Main loop: one five-second window
//! let reading = computer.step(&WHEEL).unwrap();
//! assert_eq!(reading.pulses, 2);
//! assert!(reading.speed_mph > 0.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Main loop coordinating window, calculator and display.
pub mod computer;
/// Start-time configuration constants.
pub mod config;
/// Error type for startup and rendering.
pub mod error;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// Screen layout and value formatting.
pub mod presenter;
/// Interrupt-driven wheel pulse counter.
pub mod pulse;
/// Core traits for hardware abstraction.
pub mod traits;
/// Speed and distance calculation.
pub mod trip;
/// Sampling window with LED/buzzer heartbeat.
pub mod window;

// Re-exports for convenience
pub use computer::CycleComputer;
pub use config::Config;
pub use error::ComputerError;
pub use presenter::DisplayPresenter;
pub use pulse::PulseCounter;
pub use traits::{Clock, Delay, DisplaySink, FeedbackOutput};
pub use trip::{SpeedDistanceCalculator, TripReading, TripState, WheelGeometry};
pub use window::{SampleWindowConfig, SampleWindowTimer, WindowSample};
