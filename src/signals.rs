//! Per-cycle input and output signal bundles.

use crate::DivResult;

/// Signals sampled by the unit on one clock cycle.
///
/// `dividend` and `divisor` are only looked at on a cycle where `start` is
/// asserted while the unit is idle. Only their low `BITS` bits are sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Inputs {
    /// Active-low synchronous reset.
    pub reset_n: bool,

    /// One-cycle accept pulse.
    pub start: bool,

    /// Dividend operand.
    pub dividend: i64,

    /// Divisor operand.
    pub divisor: i64,
}

impl Inputs {
    /// A cycle with no request and reset released.
    pub const fn idle() -> Self {
        Self {
            reset_n: true,
            start: false,
            dividend: 0,
            divisor: 0,
        }
    }

    /// A cycle carrying the accept pulse for `dividend / divisor`.
    pub const fn start(dividend: i64, divisor: i64) -> Self {
        Self {
            reset_n: true,
            start: true,
            dividend,
            divisor,
        }
    }

    /// A cycle with reset asserted.
    pub const fn reset() -> Self {
        Self {
            reset_n: false,
            start: false,
            dividend: 0,
            divisor: 0,
        }
    }
}

impl Default for Inputs {
    fn default() -> Self {
        Self::idle()
    }
}

/// Signals driven by the unit during one clock cycle.
///
/// `quotient`, `remainder`, `error` and `overflow` hold the most recently
/// completed operation; they are only meaningful on the cycle `done` is high.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Outputs {
    /// Signed quotient.
    pub quotient: i64,

    /// Signed remainder.
    pub remainder: i64,

    /// Division-by-zero flag.
    pub error: bool,

    /// Minimum-value-divided-by-minus-one flag.
    pub overflow: bool,

    /// High while a request is being processed.
    pub busy: bool,

    /// One-cycle completion pulse.
    pub done: bool,
}

impl Outputs {
    pub(crate) const fn new(result: &DivResult, busy: bool, done: bool) -> Self {
        Self {
            quotient: result.quotient(),
            remainder: result.remainder(),
            error: result.error(),
            overflow: result.overflow(),
            busy,
            done,
        }
    }

    /// The completed result, if this cycle carries the completion pulse.
    pub const fn result(&self) -> Option<DivResult> {
        if self.done {
            Some(DivResult::from_flags(
                self.quotient,
                self.remainder,
                self.error,
                self.overflow,
            ))
        } else {
            None
        }
    }
}
