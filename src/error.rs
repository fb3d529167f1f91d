//! Error types.

use core::fmt;

/// Errors reported when a division does not yield a normal result, or when a
/// [`Driver`][`crate::Driver`] cannot complete its handshake with the unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// The divisor was zero.
    DivisionByZero,

    /// The minimum representable value was divided by `-1`.
    Overflow,

    /// No completion pulse was observed within the given number of cycles.
    Timeout {
        /// Cycles waited before giving up.
        cycles: u64,
    },

    /// A request was submitted while the unit was still processing another one.
    Busy,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero => write!(f, "division by zero"),
            Error::Overflow => write!(f, "quotient overflow: minimum value divided by -1"),
            Error::Timeout { cycles } => {
                write!(f, "no completion pulse within {cycles} cycles")
            }
            Error::Busy => write!(f, "divider busy, request not issued"),
        }
    }
}

impl core::error::Error for Error {}
