//! ESP32 time source and blocking delay.

use crate::traits::{Clock, Delay};
use esp_idf_hal::delay::FreeRtos;

/// ESP32 clock using the hardware timer.
///
/// Provides millisecond-resolution timing using the ESP-IDF `esp_timer_get_time()`
/// function, which returns microseconds since boot. Safe to read from the
/// reed-switch interrupt handler.
///
/// # Example
///
/// ```ignore
/// use cycle_computer::hal::esp32::Esp32Clock;
/// use cycle_computer::traits::Clock;
///
/// let clock = Esp32Clock::new();
/// let start = clock.now_ms();
/// // ... do work ...
/// let elapsed = clock.now_ms() - start;
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Esp32Clock;

impl Esp32Clock {
    /// Creates a new ESP32 clock instance.
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for Esp32Clock {
    #[inline]
    fn now_ms(&self) -> u64 {
        // Safe: a plain read of the hardware timer, no side effects
        let micros = unsafe { esp_idf_hal::sys::esp_timer_get_time() };
        (micros / 1000) as u64
    }
}

/// Blocking delay that yields to FreeRTOS.
///
/// The reed-switch interrupt keeps firing while the main task sleeps here.
#[derive(Clone, Copy, Debug, Default)]
pub struct Esp32Delay;

impl Delay for Esp32Delay {
    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        FreeRtos::delay_ms(ms);
    }
}
