//! Outcome of a single completed division.

use crate::Error;

/// How a completed division terminated.
///
/// Exactly one of these holds for every completed operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    /// Normal result, both flags clear.
    #[default]
    Ok,

    /// Divisor was zero: error flag set, result forced to zero.
    DivisionByZero,

    /// Minimum value divided by `-1`: overflow flag set, result forced to zero.
    Overflow,
}

/// Signed quotient and remainder produced on a completion pulse.
///
/// Quotient and remainder follow truncating division: the quotient rounds
/// toward zero and a non-zero remainder has the sign of the dividend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DivResult {
    quotient: i64,
    remainder: i64,
    status: Status,
}

impl DivResult {
    /// The value produced when no operation has completed since reset.
    pub const ZERO: Self = Self {
        quotient: 0,
        remainder: 0,
        status: Status::Ok,
    };

    pub(crate) const fn new(quotient: i64, remainder: i64) -> Self {
        Self {
            quotient,
            remainder,
            status: Status::Ok,
        }
    }

    pub(crate) const fn division_by_zero() -> Self {
        Self {
            quotient: 0,
            remainder: 0,
            status: Status::DivisionByZero,
        }
    }

    pub(crate) const fn overflowed() -> Self {
        Self {
            quotient: 0,
            remainder: 0,
            status: Status::Overflow,
        }
    }

    /// Rebuild a result from the raw output flags.
    ///
    /// The unit never raises both flags at once; if a caller does, the error
    /// flag takes precedence.
    pub(crate) const fn from_flags(
        quotient: i64,
        remainder: i64,
        error: bool,
        overflow: bool,
    ) -> Self {
        let status = if error {
            Status::DivisionByZero
        } else if overflow {
            Status::Overflow
        } else {
            Status::Ok
        };

        Self {
            quotient,
            remainder,
            status,
        }
    }

    /// Signed quotient, sign-extended from the word width.
    pub const fn quotient(&self) -> i64 {
        self.quotient
    }

    /// Signed remainder, sign-extended from the word width.
    pub const fn remainder(&self) -> i64 {
        self.remainder
    }

    /// How the operation terminated.
    pub const fn status(&self) -> Status {
        self.status
    }

    /// The division-by-zero flag.
    pub const fn error(&self) -> bool {
        matches!(self.status, Status::DivisionByZero)
    }

    /// The overflow flag.
    pub const fn overflow(&self) -> bool {
        matches!(self.status, Status::Overflow)
    }

    /// Whether the result is a normal quotient/remainder pair.
    pub const fn is_ok(&self) -> bool {
        matches!(self.status, Status::Ok)
    }

    /// Convert into `(quotient, remainder)`, mapping the flags to [`Error`].
    pub const fn into_result(self) -> Result<(i64, i64), Error> {
        match self.status {
            Status::Ok => Ok((self.quotient, self.remainder)),
            Status::DivisionByZero => Err(Error::DivisionByZero),
            Status::Overflow => Err(Error::Overflow),
        }
    }
}

impl From<DivResult> for Result<(i64, i64), Error> {
    fn from(result: DivResult) -> Self {
        result.into_result()
    }
}
