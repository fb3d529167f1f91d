//! Cycle-level model of a signed integer divider built as an iterative
//! shift-and-subtract state machine.
//!
//! # About
//! [`Divider<BITS>`] computes one truncating signed division at a time over
//! `BITS`-wide two's complement words, where `BITS` is anywhere from 2 to 64.
//! It is advanced one clock cycle at a time with [`Divider::tick`]: a request
//! is latched on a one-cycle accept pulse, the restoring-division datapath
//! produces one quotient bit per cycle, and the signed result is presented
//! for exactly one cycle alongside a completion pulse.
//!
//! Division by zero and the single overflowing case (`MIN / -1`) are detected
//! when the request is accepted and complete on that same cycle with a flag
//! and a zeroed result.
//!
//! # Usage
//! ```
//! use restoring_divider::{Divider8, Inputs};
//!
//! let mut divider = Divider8::new();
//! let accept = divider.tick(Inputs::start(-7, 2));
//! assert!(!accept.done);
//!
//! let mut outputs = divider.tick(Inputs::idle());
//! while !outputs.done {
//!     outputs = divider.tick(Inputs::idle());
//! }
//! assert_eq!((outputs.quotient, outputs.remainder), (-3, -1));
//! assert!(!outputs.error && !outputs.overflow);
//! ```
//!
//! The [`Driver`] wraps the accept/wait handshake with a bounded wait:
//! ```
//! use restoring_divider::{Divider32, Driver, Error};
//!
//! let mut divider = Divider32::new();
//! let mut driver = Driver::new(&mut divider);
//! assert_eq!(driver.div_rem(-1_000_000, 7), Ok((-142_857, -1)));
//! assert_eq!(driver.div_rem(1, 0), Err(Error::DivisionByZero));
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

mod divider;
mod driver;
mod error;
mod operands;
mod result;
mod signals;
mod traits;
mod word;

pub use crate::{
    divider::{Divider, Phase, Registers},
    driver::{DEFAULT_TIMEOUT, Driver},
    error::Error,
    operands::Operands,
    result::{DivResult, Status},
    signals::{Inputs, Outputs},
    traits::*,
    word::Word,
};
pub use subtle;

#[cfg(feature = "rand_core")]
pub use rand_core;

#[cfg(feature = "zeroize")]
pub use zeroize;

/// 8-bit divider.
pub type Divider8 = Divider<8>;

/// 16-bit divider.
pub type Divider16 = Divider<16>;

/// 32-bit divider.
pub type Divider32 = Divider<32>;

/// 64-bit divider.
pub type Divider64 = Divider<64>;
