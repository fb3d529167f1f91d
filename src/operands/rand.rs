//! Random number generator support

use rand_core::RngCore;

use super::Operands;
use crate::{Random, word};

impl<const BITS: u32> Random for Operands<BITS> {
    /// Generate a pair with both operands uniformly distributed over the
    /// `BITS`-wide signed range.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let dividend = word::sign_extend::<BITS>(rng.next_u64() & word::mask::<BITS>());
        let divisor = word::sign_extend::<BITS>(rng.next_u64() & word::mask::<BITS>());
        Self::new(dividend, divisor)
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    use crate::{Operands, Random};

    #[test]
    fn stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let ops = Operands::<8>::random(&mut rng);
            assert!((-128..=127).contains(&ops.dividend()));
            assert!((-128..=127).contains(&ops.divisor()));
        }
    }

    #[test]
    fn covers_both_signs() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let (mut negative, mut positive) = (false, false);
        for _ in 0..64 {
            let ops = Operands::<32>::random(&mut rng);
            negative |= ops.dividend() < 0;
            positive |= ops.dividend() > 0;
        }
        assert!(negative && positive);
    }
}
