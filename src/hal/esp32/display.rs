//! SSD1306 OLED display implementation for ESP32.
//!
//! Implements [`DisplaySink`] on a 128x64 buffered SSD1306. Text uses the
//! 6x10 mono font with the top-left corner as the anchor, bitmaps are
//! 1-bit row-major MSB-first images.
//!
//! # Wiring
//!
//! - SDA → GPIO8 (also has onboard LED)
//! - SCL → GPIO9 (also shared with BOOT button)
//! - VCC → 3.3V
//! - GND → GND

use crate::traits::DisplaySink;
use embedded_graphics::{
    image::{Image, ImageRaw},
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use esp_idf_hal::i2c::I2cDriver;
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

/// SSD1306 display type alias for cleaner code.
type DisplayDriver<'d> = Ssd1306<
    I2CInterface<I2cDriver<'d>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// SSD1306 OLED display for ESP32.
///
/// Uses I2C on GPIO8 (SDA) and GPIO9 (SCL) to communicate with a 128x64 OLED.
/// Nothing is sent to the panel until [`probe`](DisplaySink::probe) succeeds.
pub struct Esp32Display<'d> {
    display: DisplayDriver<'d>,
}

impl<'d> Esp32Display<'d> {
    /// Wraps an I2C driver configured for GPIO8/9.
    pub fn new(i2c: I2cDriver<'d>) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self { display }
    }
}

impl DisplaySink for Esp32Display<'_> {
    type Error = DisplayError;

    /// Runs the controller init sequence; a NACK means no panel on the bus.
    fn probe(&mut self) -> bool {
        match self.display.init() {
            Ok(()) => true,
            Err(e) => {
                log::debug!("SSD1306 init failed: {:?}", e);
                false
            }
        }
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.display.clear(BinaryColor::Off)?;
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), Self::Error> {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.display)?;
        Ok(())
    }

    fn draw_bitmap(
        &mut self,
        buffer: &[u8],
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    ) -> Result<(), Self::Error> {
        let stride = width.div_ceil(8) as usize;
        let needed = stride * height as usize;
        if buffer.len() < needed {
            return Err(DisplayError);
        }

        let raw = ImageRaw::<BinaryColor>::new(&buffer[..needed], width);
        Image::new(&raw, Point::new(x, y)).draw(&mut self.display)?;
        Ok(())
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.display.flush()?;
        Ok(())
    }
}

/// Display error type.
#[derive(Debug)]
pub struct DisplayError;

impl From<display_interface::DisplayError> for DisplayError {
    fn from(_: display_interface::DisplayError) -> Self {
        DisplayError
    }
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SSD1306 bus error")
    }
}
