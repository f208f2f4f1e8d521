//! Start-time configuration.
//!
//! There is no CLI, config file or environment lookup: [`Config::default`]
//! carries the device's fixed constants. Builder setters exist so tests and
//! alternative boards can assemble a variant in code.
//!
//! Uses `heapless::String` for `no_std` compatibility.
//!
//! # Example
//!
//! ```rust
//! use cycle_computer::config::Config;
//! use cycle_computer::SampleWindowConfig;
//!
//! // Use defaults
//! let config = Config::default();
//! assert_eq!(config.window.sub_samples, 5);
//!
//! // Or customize
//! let config = Config::default()
//!     .with_title("MY BIKE")
//!     .with_window(SampleWindowConfig::default().with_sub_samples(3));
//! ```

use heapless::String as HString;

use crate::pulse::DEFAULT_DEBOUNCE_MS;
use crate::trip::WheelGeometry;
use crate::window::SampleWindowConfig;

/// Maximum length for short config strings (screen title)
pub const MAX_SHORT_STRING: usize = 32;

/// Type alias for short config strings
pub type ShortString = HString<MAX_SHORT_STRING>;

/// Default screen title.
pub const DEFAULT_TITLE: &str = "CYCLE COMP V5";

/// Create a ShortString from a &str, truncating at a char boundary if too long
pub fn short_string(s: &str) -> ShortString {
    let mut hs = ShortString::new();
    for c in s.chars() {
        if hs.push(c).is_err() {
            break;
        }
    }
    hs
}

// ============================================================================
// Main Config
// ============================================================================

/// Complete application configuration
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Wheel geometry
    pub wheel: WheelGeometry,
    /// Sampling window timing
    pub window: SampleWindowConfig,
    /// Minimum spacing between counted reed-switch edges
    pub debounce_ms: u32,
    /// Title line shown on every frame
    pub title: ShortString,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wheel: WheelGeometry::default(),
            window: SampleWindowConfig::default(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            title: short_string(DEFAULT_TITLE),
        }
    }
}

impl Config {
    /// Set wheel geometry
    pub fn with_wheel(mut self, wheel: WheelGeometry) -> Self {
        self.wheel = wheel;
        self
    }

    /// Set sampling window timing
    pub fn with_window(mut self, window: SampleWindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Set the debounce interval
    pub fn with_debounce_ms(mut self, ms: u32) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Set the screen title
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = short_string(title);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.wheel.diameter_in, 27.0);
        assert_eq!(config.window.sub_samples, 5);
        assert_eq!(config.debounce_ms, 100);
        assert_eq!(config.title.as_str(), "CYCLE COMP V5");
    }

    #[test]
    fn builder_pattern() {
        let config = Config::default()
            .with_wheel(WheelGeometry::new(26.0))
            .with_window(SampleWindowConfig::default().with_sub_samples(2))
            .with_debounce_ms(50)
            .with_title("ROAD");

        assert_eq!(config.wheel.diameter_in, 26.0);
        assert_eq!(config.window.sub_samples, 2);
        assert_eq!(config.debounce_ms, 50);
        assert_eq!(config.title.as_str(), "ROAD");
    }

    // =========================================================================
    // String Helper Tests
    // =========================================================================

    #[test]
    fn short_string_truncation() {
        let long_input = "a".repeat(100);
        let s = short_string(&long_input);
        assert_eq!(s.len(), MAX_SHORT_STRING);
    }

    #[test]
    fn short_string_utf8_boundary() {
        // 4-byte chars: 8 fit exactly, the 9th does not
        let input = "🚲".repeat(9);
        let s = short_string(&input);
        assert_eq!(s.len(), 32);
        assert_eq!(s.chars().count(), 8);
    }
}
