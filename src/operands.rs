//! Operand pairs for a `BITS`-wide divider.

#[cfg(feature = "rand_core")]
mod rand;

use crate::{Inputs, word};

/// A dividend/divisor pair, each held as a `BITS`-wide signed value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Operands<const BITS: u32> {
    dividend: i64,
    divisor: i64,
}

impl<const BITS: u32> Operands<BITS> {
    /// Create a pair, sampling the low `BITS` bits of each operand.
    pub const fn new(dividend: i64, divisor: i64) -> Self {
        const {
            assert!(BITS >= 2 && BITS <= 64, "divider width must be between 2 and 64 bits")
        };

        Self {
            dividend: word::sign_extend::<BITS>(word::truncate::<BITS>(dividend)),
            divisor: word::sign_extend::<BITS>(word::truncate::<BITS>(divisor)),
        }
    }

    /// The dividend.
    pub const fn dividend(&self) -> i64 {
        self.dividend
    }

    /// The divisor.
    pub const fn divisor(&self) -> i64 {
        self.divisor
    }

    /// Whether this pair divides by zero.
    pub const fn is_division_by_zero(&self) -> bool {
        self.divisor == 0
    }

    /// Whether this pair is the single overflowing case, `MIN / -1`.
    pub const fn is_overflow(&self) -> bool {
        self.dividend == word::min_value::<BITS>() && self.divisor == -1
    }

    /// Signals carrying the accept pulse for this pair.
    pub const fn inputs(&self) -> Inputs {
        Inputs::start(self.dividend, self.divisor)
    }
}

impl<const BITS: u32> From<Operands<BITS>> for Inputs {
    fn from(operands: Operands<BITS>) -> Inputs {
        operands.inputs()
    }
}
