//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use restoring_divider::{DivResult, Divider, Inputs, Status};

/// Install a logger that honours `RUST_LOG` and writes through the test harness.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Truncating division computed on `i128`, with the unit's flag semantics.
pub fn reference<const BITS: u32>(a: i64, b: i64) -> (i64, i64, Status) {
    let min = -(1i128 << (BITS - 1));
    let (a, b) = (i128::from(a), i128::from(b));

    if b == 0 {
        (0, 0, Status::DivisionByZero)
    } else if a == min && b == -1 {
        (0, 0, Status::Overflow)
    } else {
        ((a / b) as i64, (a % b) as i64, Status::Ok)
    }
}

/// Check `result` for `a / b` against every property the unit guarantees.
pub fn assert_properties<const BITS: u32>(a: i64, b: i64, result: &DivResult) {
    let (quotient, remainder, status) = reference::<BITS>(a, b);
    assert_eq!(result.status(), status, "{} / {} ({} bits)", a, b, BITS);
    assert_eq!(
        (result.quotient(), result.remainder()),
        (quotient, remainder),
        "{} / {} ({} bits)",
        a,
        b,
        BITS
    );

    if status != Status::Ok {
        return;
    }

    let (q, r) = (i128::from(result.quotient()), i128::from(result.remainder()));
    let (a, b) = (i128::from(a), i128::from(b));
    assert_eq!(q * b + r, a, "division identity");
    assert!(r.abs() < b.abs(), "|remainder| < |divisor|");
    if r != 0 {
        assert_eq!(r.signum(), a.signum(), "remainder follows dividend sign");
    }
    assert!(!result.error() && !result.overflow());
}

/// Clock one request through `divider`, returning the result and the number
/// of cycles from the accept pulse (cycle 0) to the completion pulse.
pub fn run<const BITS: u32>(divider: &mut Divider<BITS>, a: i64, b: i64) -> (DivResult, u64) {
    let accept = divider.tick(Inputs::start(a, b));
    if let Some(result) = accept.result() {
        return (result, 0);
    }

    for cycle in 1..=Divider::<BITS>::LATENCY {
        if let Some(result) = divider.tick(Inputs::idle()).result() {
            return (result, cycle);
        }
    }

    panic!("timeout waiting for completion of {} / {} ({} bits)", a, b, BITS);
}
