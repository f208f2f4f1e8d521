//! Trip screen layout and formatting.
//!
//! [`DisplayPresenter`] owns only *what* goes *where*: which strings at which
//! coordinates. Pixels are the [`DisplaySink`]'s business.
//!
//! # Screen Layout (128x64)
//!
//! ```text
//! ┌────────────────────────────┐
//! │                            │
//! │                            │
//! │ CYCLE COMP V5              │  y=20
//! │                            │
//! │  MPH     9.64              │  y=40
//! │  DIST    0.01              │  y=50
//! └────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use cycle_computer::{DisplayPresenter, SpeedDistanceCalculator, WheelGeometry};
//! use cycle_computer::hal::MockDisplay;
//!
//! let mut presenter = DisplayPresenter::new(MockDisplay::new());
//! let reading = SpeedDistanceCalculator::new(WheelGeometry::default()).compute(10, 5);
//!
//! presenter.render("CYCLE COMP V5", &reading).unwrap();
//! assert!(presenter.sink().has_text("9.64"));
//! ```

use core::fmt::Write;

use heapless::String as HString;

use crate::traits::DisplaySink;
use crate::trip::TripReading;

/// Title text position.
pub const TITLE_POS: (i32, i32) = (5, 20);
/// "MPH" label position.
pub const SPEED_LABEL_POS: (i32, i32) = (10, 40);
/// Speed value position.
pub const SPEED_VALUE_POS: (i32, i32) = (50, 40);
/// "DIST" label position.
pub const DISTANCE_LABEL_POS: (i32, i32) = (10, 50);
/// Distance value position.
pub const DISTANCE_VALUE_POS: (i32, i32) = (50, 50);

/// Splash logo position.
pub const LOGO_POS: (i32, i32) = (40, 30);
/// Splash logo width and height in pixels.
pub const LOGO_SIZE: u32 = 32;

/// 32x32 spoked wheel, 1 bit per pixel, row-major, MSB first.
pub const WHEEL_LOGO: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0xF8, 0x00,
    0x00, 0xFF, 0xFF, 0x00, 0x01, 0xF1, 0x8F, 0x80,
    0x03, 0xC1, 0x83, 0xC0, 0x07, 0x01, 0x80, 0xE0,
    0x0E, 0x01, 0x80, 0x70, 0x1D, 0x01, 0x80, 0xB8,
    0x38, 0x81, 0x81, 0x1C, 0x38, 0x41, 0x82, 0x1C,
    0x30, 0x21, 0x84, 0x0C, 0x70, 0x11, 0x88, 0x0E,
    0x60, 0x09, 0x90, 0x06, 0x60, 0x05, 0xA0, 0x06,
    0x60, 0x03, 0xC0, 0x06, 0x7F, 0xFF, 0xFF, 0xFE,
    0x7F, 0xFF, 0xFF, 0xFE, 0x60, 0x03, 0xC0, 0x06,
    0x60, 0x05, 0xA0, 0x06, 0x60, 0x09, 0x90, 0x06,
    0x70, 0x11, 0x88, 0x0E, 0x30, 0x21, 0x84, 0x0C,
    0x38, 0x41, 0x82, 0x1C, 0x38, 0x81, 0x81, 0x1C,
    0x1D, 0x01, 0x80, 0xB8, 0x0E, 0x01, 0x80, 0x70,
    0x07, 0x01, 0x80, 0xE0, 0x03, 0xC1, 0x83, 0xC0,
    0x01, 0xF1, 0x8F, 0x80, 0x00, 0xFF, 0xFF, 0x00,
    0x00, 0x1F, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Value buffer; wide enough for any plausible speed or distance.
pub type ValueString = HString<16>;

/// Formats a value to two decimals (`9.64`, `0.00`).
pub fn format_2dp(value: f64) -> ValueString {
    let mut out = ValueString::new();
    // Overflow only for absurd magnitudes; leave a marker instead of panicking
    if write!(out, "{:.2}", value).is_err() {
        out.clear();
        let _ = out.push_str("----");
    }
    out
}

/// Renders trip readings onto a [`DisplaySink`].
pub struct DisplayPresenter<S: DisplaySink> {
    sink: S,
}

impl<S: DisplaySink> DisplayPresenter<S> {
    /// Wraps a display sink.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Probes the display. See [`DisplaySink::probe`].
    pub fn probe(&mut self) -> bool {
        self.sink.probe()
    }

    /// Shows the boot splash: a blank frame with the wheel logo.
    pub fn splash(&mut self) -> Result<(), S::Error> {
        self.sink.clear()?;
        self.sink.draw_bitmap(
            &WHEEL_LOGO,
            LOGO_POS.0,
            LOGO_POS.1,
            LOGO_SIZE,
            LOGO_SIZE,
        )?;
        self.sink.present()
    }

    /// Draws one full frame: title, speed and total distance.
    pub fn render(&mut self, title: &str, reading: &TripReading) -> Result<(), S::Error> {
        let speed = format_2dp(reading.speed_display());
        let distance = format_2dp(reading.distance_display());

        self.sink.clear()?;
        self.sink.draw_text(title, TITLE_POS.0, TITLE_POS.1)?;
        self.sink
            .draw_text("MPH", SPEED_LABEL_POS.0, SPEED_LABEL_POS.1)?;
        self.sink
            .draw_text(&speed, SPEED_VALUE_POS.0, SPEED_VALUE_POS.1)?;
        self.sink
            .draw_text("DIST", DISTANCE_LABEL_POS.0, DISTANCE_LABEL_POS.1)?;
        self.sink
            .draw_text(&distance, DISTANCE_VALUE_POS.0, DISTANCE_VALUE_POS.1)?;
        self.sink.present()
    }

    /// The wrapped display sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the wrapped display sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
