//! `Word` is the storage type of every divider register. A `BITS`-wide value
//! lives in the low `BITS` bits of a [`Word`]; the bits above it are always zero.

use subtle::{Choice, ConditionallySelectable};

/// Unsigned integer type backing all registers of a [`Divider`][`crate::Divider`].
pub type Word = u64;

/// Mask selecting the low `BITS` bits of a [`Word`].
#[inline(always)]
pub(crate) const fn mask<const BITS: u32>() -> Word {
    Word::MAX >> (Word::BITS - BITS)
}

/// Bit pattern of the minimum signed value, `1000...0000`.
#[inline(always)]
pub(crate) const fn min<const BITS: u32>() -> Word {
    1 << (BITS - 1)
}

/// Bit pattern of `-1`, `1111...1111`.
#[inline(always)]
pub(crate) const fn minus_one<const BITS: u32>() -> Word {
    mask::<BITS>()
}

/// Sample the low `BITS` bits of a signed bus value.
#[inline(always)]
pub(crate) const fn truncate<const BITS: u32>(value: i64) -> Word {
    (value as Word) & mask::<BITS>()
}

/// Interpret a `BITS`-wide bit pattern as a two's complement value.
#[inline(always)]
pub(crate) const fn sign_extend<const BITS: u32>(word: Word) -> i64 {
    let shift = Word::BITS - BITS;
    ((word << shift) as i64) >> shift
}

/// Smallest signed value representable in `BITS` bits.
#[inline(always)]
pub(crate) const fn min_value<const BITS: u32>() -> i64 {
    sign_extend::<BITS>(min::<BITS>())
}

/// Largest signed value representable in `BITS` bits.
#[inline(always)]
pub(crate) const fn max_value<const BITS: u32>() -> i64 {
    sign_extend::<BITS>(min::<BITS>() - 1)
}

/// Whether the sign bit of a `BITS`-wide word is set.
#[inline]
pub(crate) fn is_negative<const BITS: u32>(word: Word) -> Choice {
    Choice::from(((word >> (BITS - 1)) & 1) as u8)
}

/// Two's complement negation within `BITS` bits.
#[inline]
pub(crate) const fn wrapping_neg<const BITS: u32>(word: Word) -> Word {
    word.wrapping_neg() & mask::<BITS>()
}

/// Negate `word` within `BITS` bits when `choice` is truthy.
#[inline]
pub(crate) fn wrapping_neg_if<const BITS: u32>(word: Word, choice: Choice) -> Word {
    Word::conditional_select(&word, &wrapping_neg::<BITS>(word), choice)
}

/// The magnitude and sign of a `BITS`-wide two's complement word.
///
/// The magnitude of the minimum value, `2^(BITS-1)`, still fits the unsigned
/// `BITS`-bit register, so this never loses information.
#[inline]
pub(crate) fn abs_sign<const BITS: u32>(word: Word) -> (Word, Choice) {
    let sign = is_negative::<BITS>(word);
    (wrapping_neg_if::<BITS>(word, sign), sign)
}
