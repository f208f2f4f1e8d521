//! ESP32-C3 SuperMini hardware abstraction layer for the cycle computer.
//!
//! # Hardware Configuration
//!
//! - **MCU**: ESP32-C3 SuperMini (RISC-V 160MHz, 4MB Flash)
//! - **Sensor**: fork-mounted reed switch with RC debounce network
//! - **Feedback**: status LED and piezo buzzer
//! - **Display**: SSD1306 128x64 OLED (I2C)
//!
//! # Pin Assignments
//!
//! See the [`pins`] module for GPIO assignments matching the SuperMini layout.

mod clock;
mod indicator;
mod reed;

pub use clock::{Esp32Clock, Esp32Delay};
pub use indicator::Esp32Indicator;
pub use reed::Esp32ReedSwitch;

#[cfg(feature = "display")]
mod display;
#[cfg(feature = "display")]
pub use display::{DisplayError, Esp32Display};

/// Pin assignments for SuperMini ESP32-C3.
///
/// - Reed switch on GPIO1
/// - LED and buzzer on GPIO3, 4
/// - I2C display on GPIO8, 9
pub mod pins {
    // =========================================================================
    // Wheel Sensor
    // =========================================================================

    /// Reed switch input. Idles high through the external 1k pull-up and RC
    /// network; the switch pulls it low and the release edge rises once per
    /// wheel revolution.
    pub const REED: i32 = 1;

    // =========================================================================
    // Feedback
    // =========================================================================

    /// Status LED output (active high)
    pub const LED: i32 = 3;

    /// Piezo buzzer output (active high)
    pub const BUZZER: i32 = 4;

    // =========================================================================
    // I2C Display (SSD1306)
    // =========================================================================

    /// I2C data line (also has onboard blue LED - will flicker during I2C)
    pub const I2C_SDA: i32 = 8;

    /// I2C clock line (also shared with BOOT button - only affects programming)
    pub const I2C_SCL: i32 = 9;

    /// I2C bus frequency in Hz
    pub const I2C_FREQ_HZ: u32 = 200_000;

    /// Default I2C address for SSD1306 OLED
    pub const OLED_I2C_ADDR: u8 = 0x3C;
}
