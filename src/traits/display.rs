//! Display abstraction for the trip screen.
//!
//! This module defines the [`DisplaySink`] trait, the minimal drawing
//! contract the presenter needs from a small monochrome display (SSD1306
//! OLED, simulated displays for testing, etc.).

/// Minimal drawing contract for a monochrome display.
///
/// Implementors provide hardware-specific rendering. Drawing calls go to an
/// off-screen frame; nothing is visible until [`present`](Self::present).
///
/// # Example
///
/// ```ignore
/// use cycle_computer::traits::DisplaySink;
///
/// struct MyDisplay { /* ... */ }
///
/// impl DisplaySink for MyDisplay {
///     type Error = ();
///
///     fn probe(&mut self) -> bool { true }
///     fn clear(&mut self) -> Result<(), ()> { Ok(()) }
///     fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), ()> { Ok(()) }
///     fn draw_bitmap(&mut self, buf: &[u8], x: i32, y: i32, w: u32, h: u32) -> Result<(), ()> {
///         Ok(())
///     }
///     fn present(&mut self) -> Result<(), ()> { Ok(()) }
/// }
/// ```
pub trait DisplaySink {
    /// Error type for display operations.
    type Error;

    /// Checks that a display answers on the bus and prepares it for drawing.
    ///
    /// Returns `false` when no device was found. Callers treat that as a
    /// fatal startup condition.
    fn probe(&mut self) -> bool;

    /// Clears the frame.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draws a line of text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), Self::Error>;

    /// Draws a 1-bit bitmap (row-major, MSB first, rows padded to whole bytes)
    /// with its top-left corner at `(x, y)`.
    fn draw_bitmap(
        &mut self,
        buffer: &[u8],
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    ) -> Result<(), Self::Error>;

    /// Commits the frame to the physical display.
    fn present(&mut self) -> Result<(), Self::Error>;
}
