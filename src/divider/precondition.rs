//! Operand preconditioning performed on the accept cycle.

use super::Registers;
use crate::{
    DivResult,
    word::{self, Word},
};

/// What the control state machine does with an accepted request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Accepted {
    /// Terminal case detected up front; completes on the accept cycle.
    Terminal(DivResult),

    /// Operands converted to sign-magnitude form, ready to iterate.
    Iterate(Registers),
}

/// Split `dividend` and `divisor` into signs and magnitudes, or short-circuit
/// on division by zero and on `MIN / -1`.
///
/// Both operands are `BITS`-wide bit patterns.
pub(crate) fn precondition<const BITS: u32>(dividend: Word, divisor: Word) -> Accepted {
    if divisor == 0 {
        return Accepted::Terminal(DivResult::division_by_zero());
    }
    if dividend == word::min::<BITS>() && divisor == word::minus_one::<BITS>() {
        return Accepted::Terminal(DivResult::overflowed());
    }

    let (dividend_mag, dividend_sgn) = word::abs_sign::<BITS>(dividend);
    let (divisor_mag, divisor_sgn) = word::abs_sign::<BITS>(divisor);

    // The quotient is negative iff the operands have opposing signs; the
    // remainder follows the dividend.
    let negate_quotient = dividend_sgn ^ divisor_sgn;

    Accepted::Iterate(Registers {
        divisor: divisor_mag,
        dividend: dividend_mag,
        remainder: 0,
        quotient: 0,
        count: BITS,
        negate_quotient: negate_quotient.into(),
        negate_remainder: dividend_sgn.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::{Accepted, precondition};
    use crate::{DivResult, word};

    fn iterate<const BITS: u32>(dividend: i64, divisor: i64) -> super::Registers {
        let dividend = word::truncate::<BITS>(dividend);
        let divisor = word::truncate::<BITS>(divisor);
        match precondition::<BITS>(dividend, divisor) {
            Accepted::Iterate(registers) => registers,
            Accepted::Terminal(result) => panic!("unexpected terminal result {result:?}"),
        }
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(
            precondition::<8>(5, 0),
            Accepted::Terminal(DivResult::division_by_zero())
        );
        // Zero divided by zero is still a division by zero.
        assert_eq!(
            precondition::<8>(0, 0),
            Accepted::Terminal(DivResult::division_by_zero())
        );
    }

    #[test]
    fn overflow() {
        assert_eq!(
            precondition::<8>(0x80, 0xFF),
            Accepted::Terminal(DivResult::overflowed())
        );
        assert_eq!(
            precondition::<64>(1 << 63, u64::MAX),
            Accepted::Terminal(DivResult::overflowed())
        );
        assert_eq!(
            precondition::<2>(0b10, 0b11),
            Accepted::Terminal(DivResult::overflowed())
        );
    }

    #[test]
    fn neighbours_of_terminal_cases_iterate() {
        for (dividend, divisor) in [(0x80, 0xFE), (0x81, 0xFF), (0x7F, 0xFF), (0x00, 0x01)] {
            assert!(
                matches!(precondition::<8>(dividend, divisor), Accepted::Iterate(_)),
                "{:#x} / {:#x}",
                dividend,
                divisor
            );
        }
        // Only the full-width minimum pattern overflows.
        assert!(matches!(precondition::<16>(0x80, 0xFFFF), Accepted::Iterate(_)));
        assert!(matches!(precondition::<16>(0x8000, 0xFF), Accepted::Iterate(_)));
    }

    #[test]
    fn min_by_one_iterates() {
        let registers = iterate::<8>(-128, 1);
        assert_eq!(registers.dividend, 128);
        assert_eq!(registers.divisor, 1);
        assert!(registers.negate_quotient);
        assert!(registers.negate_remainder);
    }

    #[test]
    fn signs() {
        let registers = iterate::<8>(-7, 2);
        assert_eq!((registers.dividend, registers.divisor), (7, 2));
        assert!(registers.negate_quotient);
        assert!(registers.negate_remainder);

        let registers = iterate::<8>(7, -2);
        assert!(registers.negate_quotient);
        assert!(!registers.negate_remainder);

        let registers = iterate::<8>(-7, -2);
        assert!(!registers.negate_quotient);
        assert!(registers.negate_remainder);
    }

    #[test]
    fn accumulators_cleared() {
        let registers = iterate::<32>(1000, 3);
        assert_eq!(registers.remainder, 0);
        assert_eq!(registers.quotient, 0);
        assert_eq!(registers.count, 32);
    }
}
