//! Speed and distance derivation from per-window pulse counts.
//!
//! One pulse is one wheel revolution, so distance per pulse is the wheel
//! circumference. Over a window of `window_seconds`:
//!
//! ```text
//! pps            = pulses / window_seconds
//! inches/hour    = pps * 3600 * circumference
//! mph            = inches/hour / 63360
//! window miles   = mph / 3600 * window_seconds
//! ```
//!
//! Accumulation always uses full precision. Rounding to two decimals only
//! happens at the display boundary ([`TripReading::speed_display`],
//! [`TripReading::distance_display`]).
//!
//! # Example
//!
//! ```rust
//! use cycle_computer::{SpeedDistanceCalculator, WheelGeometry};
//!
//! let mut calc = SpeedDistanceCalculator::new(WheelGeometry::default());
//!
//! // 10 revolutions of a 27" wheel in 5 seconds
//! let reading = calc.compute(10, 5);
//! assert!((reading.speed_mph - 9.64).abs() < 0.01);
//! assert_eq!(reading.speed_display(), 9.64);
//! ```

use core::f64::consts::PI;

/// Inches in one statute mile.
pub const INCHES_PER_MILE: f64 = 63_360.0;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Default wheel diameter in inches (27" road wheel).
pub const DEFAULT_WHEEL_DIAMETER_IN: f64 = 27.0;

/// Fixed wheel geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelGeometry {
    /// Wheel diameter in inches.
    pub diameter_in: f64,
}

impl WheelGeometry {
    /// Creates a wheel with the given diameter in inches.
    pub const fn new(diameter_in: f64) -> Self {
        Self { diameter_in }
    }

    /// Distance covered by one revolution, in inches.
    #[inline]
    pub fn circumference_in(&self) -> f64 {
        self.diameter_in * PI
    }
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_WHEEL_DIAMETER_IN)
    }
}

/// Running trip totals. Lives for the whole process; never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripState {
    /// Accumulated distance in miles (full precision).
    pub total_distance_miles: f64,
    /// Speed computed for the most recent window, in mph.
    pub last_speed_mph: f64,
}

/// Result of one window computation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripReading {
    /// Pulses counted in the window.
    pub pulses: u32,
    /// Window length in seconds.
    pub window_seconds: u32,
    /// Pulses per second over the window.
    pub pulses_per_second: f64,
    /// Speed over the window, mph.
    pub speed_mph: f64,
    /// Distance covered in this window, miles.
    pub increment_miles: f64,
    /// Total distance after this window, miles.
    pub total_distance_miles: f64,
}

impl TripReading {
    /// Speed rounded to two decimals for presentation.
    pub fn speed_display(&self) -> f64 {
        round_2dp(self.speed_mph)
    }

    /// Total distance rounded to two decimals for presentation.
    pub fn distance_display(&self) -> f64 {
        round_2dp(self.total_distance_miles)
    }
}

/// Rounds half away from zero to two decimal places.
///
/// Works without `std` (no `f64::round` in `core`).
pub fn round_2dp(value: f64) -> f64 {
    let scaled = value * 100.0;
    let rounded = if scaled >= 0.0 {
        (scaled + 0.5) as i64
    } else {
        (scaled - 0.5) as i64
    };
    rounded as f64 / 100.0
}

/// Converts per-window pulse counts into speed and accumulated distance.
#[derive(Clone, Debug)]
pub struct SpeedDistanceCalculator {
    wheel: WheelGeometry,
    trip: TripState,
}

impl SpeedDistanceCalculator {
    /// Creates a calculator with zeroed trip totals.
    pub fn new(wheel: WheelGeometry) -> Self {
        Self {
            wheel,
            trip: TripState::default(),
        }
    }

    /// Computes speed for one window and adds its distance to the trip.
    ///
    /// Zero pulses yields zero speed and leaves the total unchanged. A
    /// zero-length window has no defined speed and is treated the same way.
    pub fn compute(&mut self, pulses: u32, window_seconds: u32) -> TripReading {
        let (pulses_per_second, speed_mph, increment_miles) = if pulses == 0 || window_seconds == 0
        {
            (0.0, 0.0, 0.0)
        } else {
            let seconds = window_seconds as f64;
            let pps = pulses as f64 / seconds;
            let inches_per_hour = pps * SECONDS_PER_HOUR * self.wheel.circumference_in();
            let mph = inches_per_hour / INCHES_PER_MILE;
            (pps, mph, mph / SECONDS_PER_HOUR * seconds)
        };

        self.trip.total_distance_miles += increment_miles;
        self.trip.last_speed_mph = speed_mph;

        TripReading {
            pulses,
            window_seconds,
            pulses_per_second,
            speed_mph,
            increment_miles,
            total_distance_miles: self.trip.total_distance_miles,
        }
    }

    /// Current trip totals.
    pub fn trip(&self) -> &TripState {
        &self.trip
    }

    /// Wheel geometry in use.
    pub fn wheel(&self) -> &WheelGeometry {
        &self.wheel
    }
}
