//! One restoring-division step of the shift-subtract datapath.

use subtle::{ConditionallySelectable, ConstantTimeLess};

use super::Registers;
use crate::word::{self, Word};

impl Registers {
    /// Shift the next dividend bit into the partial remainder, subtract the
    /// divisor if it fits and shift the resulting quotient bit in.
    ///
    /// Dividend bits are consumed most significant first: with `count == k`
    /// on entry, bit `k - 1` is brought in.
    #[inline]
    pub(crate) fn step<const BITS: u32>(&mut self) {
        debug_assert!(self.count > 0 && self.count <= BITS);
        debug_assert!(self.remainder < self.divisor);

        let index = self.count - 1;
        let bit = (self.dividend >> index) & 1;

        // remainder < divisor <= 2^(BITS-1), so the shifted value fits BITS bits
        let shifted = (self.remainder << 1) | bit;
        let fits = !shifted.ct_lt(&self.divisor);

        let difference = shifted.wrapping_sub(self.divisor);
        self.remainder = Word::conditional_select(&shifted, &difference, fits);

        let quotient_bit = Word::from(fits.unwrap_u8());
        self.quotient = ((self.quotient << 1) | quotient_bit) & word::mask::<BITS>();
        self.count = index;

        log::trace!(
            "div step: count={} bit={} remainder={:#x} quotient={:#x}",
            self.count,
            bit,
            self.remainder,
            self.quotient
        );
    }
}
