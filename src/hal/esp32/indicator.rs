//! LED and buzzer outputs on plain GPIO.
//!
//! # Wiring
//!
//! - LED (with series resistor) → GPIO3
//! - Active piezo buzzer → GPIO4
//! - GND → GND

use crate::traits::FeedbackOutput;
use embedded_hal::digital::{OutputPin as HalOutputPin, PinState};
use esp_idf_hal::gpio::{Output, OutputPin, PinDriver};
use esp_idf_hal::peripheral::Peripheral;

/// Active-high digital feedback output.
///
/// Works with any `embedded-hal` output pin; [`new`](Self::new) builds one
/// from an ESP32 GPIO.
///
/// # Example
///
/// ```ignore
/// use cycle_computer::hal::esp32::Esp32Indicator;
/// use cycle_computer::traits::FeedbackOutput;
///
/// let peripherals = Peripherals::take()?;
/// let mut led = Esp32Indicator::new(peripherals.pins.gpio3)?;
/// led.on();
/// ```
pub struct Esp32Indicator<P: HalOutputPin> {
    pin: P,
}

impl<'d, T: OutputPin> Esp32Indicator<PinDriver<'d, T, Output>> {
    /// Configures `pin` as a push-pull output, driven low.
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO initialization fails.
    pub fn new(pin: impl Peripheral<P = T> + 'd) -> Result<Self, esp_idf_hal::sys::EspError> {
        let mut pin = PinDriver::output(pin)?;
        pin.set_low()?;
        Ok(Self { pin })
    }
}

impl<P: HalOutputPin> Esp32Indicator<P> {
    /// Wraps an already-configured output pin.
    pub fn from_pin(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: HalOutputPin> FeedbackOutput for Esp32Indicator<P> {
    fn set_active(&mut self, active: bool) {
        if let Err(e) = self.pin.set_state(PinState::from(active)) {
            log::warn!("feedback pin write failed: {:?}", e);
        }
    }
}
