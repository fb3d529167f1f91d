//! Sign restoration once iteration has completed.

use subtle::Choice;

use super::Registers;
use crate::{DivResult, word};

impl Registers {
    /// Reapply the latched signs to the unsigned quotient and remainder.
    pub(crate) fn restore<const BITS: u32>(&self) -> DivResult {
        debug_assert_eq!(self.count, 0);

        // MIN / -1 never reaches the datapath, so the quotient magnitude always
        // fits the signed range for its sign: at most 2^(BITS-1) when negative,
        // 2^(BITS-1) - 1 otherwise.
        debug_assert!(
            self.quotient < word::min::<BITS>()
                || (self.negate_quotient && self.quotient == word::min::<BITS>()),
            "quotient magnitude {:#x} does not fit {} signed bits",
            self.quotient,
            BITS
        );
        debug_assert!(self.remainder < word::min::<BITS>());

        let negate_quotient = Choice::from(u8::from(self.negate_quotient));
        let negate_remainder = Choice::from(u8::from(self.negate_remainder));

        let quotient = word::wrapping_neg_if::<BITS>(self.quotient, negate_quotient);
        let remainder = word::wrapping_neg_if::<BITS>(self.remainder, negate_remainder);

        DivResult::new(
            word::sign_extend::<BITS>(quotient),
            word::sign_extend::<BITS>(remainder),
        )
    }
}
