//! Reed-switch wheel sensor on a GPIO rising-edge interrupt.
//!
//! The ISR only timestamps the edge and hands it to the shared
//! [`PulseCounter`]; debounce is a timestamp comparison, so the handler never
//! sleeps and detection is never disarmed.
//!
//! # Wiring
//!
//! ```text
//! 3.3V ──1k──┬──1k──┬──> GPIO1
//!            │      │
//!         reed-sw  1uF
//!            │      │
//!           GND    GND
//! ```

use core::ffi::c_void;

use crate::pulse::PulseCounter;
use crate::traits::Clock;
use esp_idf_hal::gpio::{Input, InputPin, InterruptType, OutputPin, PinDriver, Pull};
use esp_idf_hal::peripheral::Peripheral;
use esp_idf_hal::sys::{self, esp, EspError};

use super::Esp32Clock;

/// Reed switch feeding a [`PulseCounter`] from interrupt context.
///
/// The counter must be `'static`: the ISR can fire at any time until this
/// value is dropped, which unregisters the handler.
///
/// # Example
///
/// ```ignore
/// use cycle_computer::hal::esp32::Esp32ReedSwitch;
/// use cycle_computer::PulseCounter;
///
/// static WHEEL: PulseCounter = PulseCounter::new(100);
///
/// let peripherals = Peripherals::take()?;
/// let _reed = Esp32ReedSwitch::new(peripherals.pins.gpio1, &WHEEL)?;
///
/// loop {
///     FreeRtos::delay_ms(5000);
///     println!("revolutions: {}", WHEEL.take());
/// }
/// ```
pub struct Esp32ReedSwitch<'d, P>
where
    P: InputPin + OutputPin,
{
    pin: PinDriver<'d, P, Input>,
    counter: &'static PulseCounter,
}

impl<'d, P> Esp32ReedSwitch<'d, P>
where
    P: InputPin + OutputPin,
{
    /// Configures the pin and registers the rising-edge handler.
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO or ISR-service setup fails.
    pub fn new(
        pin: impl Peripheral<P = P> + 'd,
        counter: &'static PulseCounter,
    ) -> Result<Self, EspError> {
        let mut pin = PinDriver::input(pin)?;
        // The internal ~45k pull-down is swamped by the external 1k pull-up
        // and only holds the line low when the sensor is unplugged
        pin.set_pull(Pull::Down)?;
        pin.set_interrupt_type(InterruptType::PosEdge)?;

        let gpio = pin.pin() as sys::gpio_num_t;

        // The service may already be running for other drivers
        let installed = unsafe { sys::gpio_install_isr_service(0) };
        if installed != sys::ESP_ERR_INVALID_STATE as sys::esp_err_t {
            esp!(installed)?;
        }

        // Registered directly: `PinDriver::subscribe` disarms the interrupt
        // after every edge, which would drop pulses between re-enables.
        // SAFETY: `counter` is 'static and only used through atomics
        unsafe {
            esp!(sys::gpio_isr_handler_add(
                gpio,
                Some(on_reed_edge),
                counter as *const PulseCounter as *mut c_void,
            ))?;
            esp!(sys::gpio_intr_enable(gpio))?;
        }

        Ok(Self { pin, counter })
    }

    /// The counter this switch feeds.
    pub fn counter(&self) -> &'static PulseCounter {
        self.counter
    }

    /// Current level of the sensor line.
    pub fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

impl<P> Drop for Esp32ReedSwitch<'_, P>
where
    P: InputPin + OutputPin,
{
    fn drop(&mut self) {
        let gpio = self.pin.pin() as sys::gpio_num_t;
        unsafe {
            sys::gpio_intr_disable(gpio);
            sys::gpio_isr_handler_remove(gpio);
        }
    }
}

/// Rising-edge ISR.
unsafe extern "C" fn on_reed_edge(arg: *mut c_void) {
    // SAFETY: `arg` is the `&'static PulseCounter` registered in `new`
    let counter = unsafe { &*(arg as *const PulseCounter) };
    counter.on_edge(Esp32Clock.now_ms());
}
