//! ESP32-C3 SuperMini bicycle computer.
//!
//! This is the main entry point for the physical hardware. It:
//! - Probes the SSD1306 OLED and exits if none is found
//! - Registers the reed-switch rising-edge interrupt
//! - Runs five-second sampling windows forever, blinking the LED and
//!   chirping the buzzer once a second
//! - Renders speed (mph) and trip distance (miles) after every window
//!
//! # Build
//!
//! ```bash
//! cargo build --release --features esp32,display --bin cycle_computer
//! espflash flash --monitor target/riscv32imc-esp-espidf/release/cycle_computer
//! ```

use cycle_computer::hal::esp32::{pins, Esp32Delay, Esp32Display, Esp32Indicator, Esp32ReedSwitch};
use cycle_computer::{Config, CycleComputer, PulseCounter};
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::prelude::*;

fn main() -> anyhow::Result<()> {
    // Initialize ESP-IDF
    esp_idf_hal::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    println!();
    println!("================================");
    println!("  Cycle Computer (ESP32-C3)");
    println!("================================");
    println!();

    let config = Config::default();
    let peripherals = Peripherals::take()?;

    // Shared with the reed-switch ISR for the life of the process
    let wheel: &'static PulseCounter =
        Box::leak(Box::new(PulseCounter::new(config.debounce_ms)));

    // =========================================================================
    // Initialize Display (SSD1306 on GPIO8/9)
    // =========================================================================
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio8, // SDA
        peripherals.pins.gpio9, // SCL
        &I2cConfig::new().baudrate(pins::I2C_FREQ_HZ.Hz()),
    )?;
    let display = Esp32Display::new(i2c);

    // =========================================================================
    // Initialize LED (GPIO3) and Buzzer (GPIO4)
    // =========================================================================
    let led = Esp32Indicator::new(peripherals.pins.gpio3)?;
    let buzzer = Esp32Indicator::new(peripherals.pins.gpio4)?;
    println!(
        "[OK] LED/buzzer initialized (GPIO{}/{})",
        pins::LED,
        pins::BUZZER
    );

    let mut computer = CycleComputer::new(config, led, buzzer, Esp32Delay, display);

    // No display is fatal: exit before the main loop
    computer.start()?;
    println!(
        "[OK] Display initialized (I2C addr {:#04x}, GPIO{}/{} @ {} Hz)",
        pins::OLED_I2C_ADDR,
        pins::I2C_SDA,
        pins::I2C_SCL,
        pins::I2C_FREQ_HZ
    );

    // =========================================================================
    // Initialize Reed Switch (GPIO1, rising edge)
    // =========================================================================
    let _reed = Esp32ReedSwitch::new(peripherals.pins.gpio1, wheel)?;
    println!(
        "[OK] Reed switch armed (GPIO{}, {}ms debounce)",
        pins::REED,
        wheel.debounce_ms()
    );

    println!();
    println!(
        "Sampling every {}s (wheel {}\")...",
        computer.config().window.window_seconds(),
        computer.config().wheel.diameter_in
    );
    println!();

    computer.run(wheel)
}
