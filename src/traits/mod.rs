//! Trait definitions for hardware abstraction.
//!
//! This module defines the core abstractions that allow the cycle computer to
//! run on different hardware (ESP32, desktop mock).
//!
//! # Submodules
//!
//! - `hardware`: Clock, blocking delay, LED/buzzer outputs
//! - `display`: Display sink trait
//!
//! # Hardware Abstraction
//!
//! The key hardware traits are:
//!
//! - [`Clock`]: Time source for edge timestamps
//! - [`Delay`]: Blocking sleep for the sampling window
//! - [`FeedbackOutput`]: Status LED and buzzer
//! - [`DisplaySink`]: Text and bitmap drawing on the OLED

pub mod display;
pub mod hardware;

pub use display::*;
pub use hardware::*;
