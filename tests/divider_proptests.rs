//! Equivalence tests between `restoring_divider::Divider` and native integer division.

mod common;

use common::{assert_properties, run};
use num_traits::{CheckedRem, PrimInt, Signed};
use proptest::prelude::*;
use restoring_divider::{Divider, Divider16, Divider32, Divider64, Operands};

/// Compare the divider against `T`'s own checked division.
fn matches_native<T, const BITS: u32>(a: T, b: T)
where
    T: PrimInt + Signed + CheckedRem + Into<i64> + core::fmt::Debug,
{
    let result = Divider::<BITS>::div_rem(a.into(), b.into());

    match (a.checked_div(&b), a.checked_rem(&b)) {
        (Some(quotient), Some(remainder)) => {
            let (quotient, remainder): (i64, i64) = (quotient.into(), remainder.into());
            assert!(result.is_ok(), "{:?} / {:?}", a, b);
            assert_eq!(result.quotient(), quotient);
            assert_eq!(result.remainder(), remainder);
        }
        _ => {
            assert!(!result.is_ok(), "{:?} / {:?}", a, b);
            assert_eq!((result.quotient(), result.remainder()), (0, 0));
        }
    }
}

#[test]
fn native_i8_exhaustive() {
    for a in i8::MIN..=i8::MAX {
        for b in i8::MIN..=i8::MAX {
            matches_native::<i8, 8>(a, b);
        }
    }
}

prop_compose! {
    fn operands16()(a in any::<i64>(), b in any::<i64>()) -> Operands<16> {
        Operands::new(a, b)
    }
}
prop_compose! {
    fn operands32()(a in any::<i64>(), b in any::<i64>()) -> Operands<32> {
        Operands::new(a, b)
    }
}
prop_compose! {
    fn small_divisor()(b in -4i64..=4) -> i64 {
        b
    }
}

proptest! {
    #[test]
    fn native_i16(a in any::<i16>(), b in any::<i16>()) {
        matches_native::<i16, 16>(a, b);
    }

    #[test]
    fn native_i32(a in any::<i32>(), b in any::<i32>()) {
        matches_native::<i32, 32>(a, b);
    }

    #[test]
    fn native_i64(a in any::<i64>(), b in any::<i64>()) {
        matches_native::<i64, 64>(a, b);
    }

    #[test]
    fn native_i64_small_divisor(a in any::<i64>(), b in small_divisor()) {
        matches_native::<i64, 64>(a, b);
    }

    #[test]
    fn clocked_16(ops in operands16()) {
        let mut divider = Divider16::new();
        let (result, cycles) = run(&mut divider, ops.dividend(), ops.divisor());
        assert_properties::<16>(ops.dividend(), ops.divisor(), &result);
        prop_assert!(cycles == 0 || cycles == Divider16::LATENCY);
        prop_assert_eq!(cycles == 0, ops.is_division_by_zero() || ops.is_overflow());
    }

    #[test]
    fn clocked_32(ops in operands32()) {
        let mut divider = Divider32::new();
        let (result, _) = run(&mut divider, ops.dividend(), ops.divisor());
        assert_properties::<32>(ops.dividend(), ops.divisor(), &result);
    }

    #[test]
    fn clocked_64(a in any::<i64>(), b in any::<i64>()) {
        let mut divider = Divider64::new();
        let (result, _) = run(&mut divider, a, b);
        assert_properties::<64>(a, b, &result);
        prop_assert_eq!(result, Divider64::div_rem(a, b));
    }

    #[test]
    fn odd_width_matches_reference(a in any::<i64>(), b in any::<i64>()) {
        let ops = Operands::<23>::new(a, b);
        let result = Divider::<23>::div_rem(ops.dividend(), ops.divisor());
        assert_properties::<23>(ops.dividend(), ops.divisor(), &result);
    }
}
