//! Error type for the cycle computer.
//!
//! The domain has one fatal condition (no display on the bus at startup)
//! and one recoverable one (a single frame failed to draw). Arithmetic edge
//! cases such as zero pulses are valid readings, not errors.

use core::fmt;

/// Errors surfaced by [`CycleComputer`](crate::CycleComputer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComputerError<E> {
    /// The display did not answer the startup probe. Fatal.
    DisplayNotFound,
    /// A drawing or present call failed.
    Display(E),
}

impl<E> ComputerError<E> {
    /// Whether the process must stop rather than carry on to the next window.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ComputerError::DisplayNotFound)
    }
}

impl<E> From<E> for ComputerError<E> {
    fn from(e: E) -> Self {
        ComputerError::Display(e)
    }
}

impl<E: fmt::Debug> fmt::Display for ComputerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputerError::DisplayNotFound => write!(f, "no I2C display found"),
            ComputerError::Display(e) => write!(f, "display error: {:?}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for ComputerError<E> {}
