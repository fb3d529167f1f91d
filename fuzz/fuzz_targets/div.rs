#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use restoring_divider::{Divider8, Divider16, Divider32, Divider64, Driver, Error};

#[derive(Arbitrary, Debug)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
}

fn check(result: Result<(i64, i64), Error>, native: Option<(i64, i64)>) {
    match native {
        Some(expected) => assert_eq!(result, Ok(expected)),
        None => assert!(matches!(result, Err(Error::DivisionByZero | Error::Overflow))),
    }
}

fuzz_target!(|requests: Vec<(Width, i64, i64)>| {
    let mut d8 = Divider8::new();
    let mut d16 = Divider16::new();
    let mut d32 = Divider32::new();
    let mut d64 = Divider64::new();

    for (width, a, b) in requests {
        match width {
            Width::W8 => {
                let (a, b) = (a as i8, b as i8);
                let native: Option<(i64, i64)> =
                    a.checked_div(b).zip(a.checked_rem(b)).map(|(q, r)| (q.into(), r.into()));
                check(Driver::new(&mut d8).div_rem(a.into(), b.into()), native);
            }
            Width::W16 => {
                let (a, b) = (a as i16, b as i16);
                let native: Option<(i64, i64)> =
                    a.checked_div(b).zip(a.checked_rem(b)).map(|(q, r)| (q.into(), r.into()));
                check(Driver::new(&mut d16).div_rem(a.into(), b.into()), native);
            }
            Width::W32 => {
                let (a, b) = (a as i32, b as i32);
                let native: Option<(i64, i64)> =
                    a.checked_div(b).zip(a.checked_rem(b)).map(|(q, r)| (q.into(), r.into()));
                check(Driver::new(&mut d32).div_rem(a.into(), b.into()), native);
            }
            Width::W64 => {
                let native = a.checked_div(b).zip(a.checked_rem(b));
                check(Driver::new(&mut d64).div_rem(a, b), native);
            }
        }
    }
});
