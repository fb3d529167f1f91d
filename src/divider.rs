//! Control state machine of the iterative signed divider.

mod precondition;
mod restore;
mod step;

use precondition::{Accepted, precondition};

use subtle::{Choice, CtOption};

use crate::{
    Clocked, DivResult, Inputs, Outputs,
    word::{self, Word},
};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Phase of the control state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for an accept pulse.
    #[default]
    Idle,

    /// Running one shift-subtract step per cycle.
    Iterating,

    /// Applying sign restoration and raising the completion pulse.
    Finalize,
}

/// Iteration state latched when a request is accepted.
///
/// All values are `BITS`-wide unsigned magnitudes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Registers {
    pub(crate) divisor: Word,
    pub(crate) dividend: Word,
    pub(crate) remainder: Word,
    pub(crate) quotient: Word,
    pub(crate) count: u32,
    pub(crate) negate_quotient: bool,
    pub(crate) negate_remainder: bool,
}

impl Registers {
    /// Divisor magnitude.
    pub const fn divisor(&self) -> Word {
        self.divisor
    }

    /// Dividend magnitude.
    pub const fn dividend(&self) -> Word {
        self.dividend
    }

    /// Partial remainder.
    pub const fn remainder(&self) -> Word {
        self.remainder
    }

    /// Quotient accumulator.
    pub const fn quotient(&self) -> Word {
        self.quotient
    }

    /// Steps left before the quotient is complete.
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Whether the quotient will be negated on completion.
    pub const fn negate_quotient(&self) -> bool {
        self.negate_quotient
    }

    /// Whether the remainder will be negated on completion.
    pub const fn negate_remainder(&self) -> bool {
        self.negate_remainder
    }
}

/// Signed restoring divider over `BITS`-wide two's complement words.
///
/// A request is accepted on a cycle where [`Inputs::start`] is high and the
/// unit is idle. Division by zero and `MIN / -1` complete on that same cycle.
/// Any other request iterates for `BITS` cycles, one quotient bit per cycle,
/// and completes on the following cycle, so the completion pulse arrives
/// `BITS + 1` cycles after the accept pulse. Requests issued while busy are
/// dropped.
///
/// `BITS` must lie in `2..=64`; other widths fail to compile.
#[derive(Clone, Copy, Debug)]
pub struct Divider<const BITS: u32> {
    phase: Phase,
    registers: Registers,
    latched: DivResult,
    cycles: u64,
}

impl<const BITS: u32> Divider<BITS> {
    /// Word width in bits.
    pub const BITS: u32 = BITS;

    /// Smallest representable operand.
    pub const MIN: i64 = word::min_value::<BITS>();

    /// Largest representable operand.
    pub const MAX: i64 = word::max_value::<BITS>();

    /// Cycles from the accept pulse to the completion pulse of a request that
    /// goes through the datapath.
    pub const LATENCY: u64 = BITS as u64 + 1;

    /// Create an idle divider with cleared registers.
    pub const fn new() -> Self {
        const {
            assert!(BITS >= 2 && BITS <= 64, "divider width must be between 2 and 64 bits")
        };

        Self {
            phase: Phase::Idle,
            registers: Registers {
                divisor: 0,
                dividend: 0,
                remainder: 0,
                quotient: 0,
                count: 0,
                negate_quotient: false,
                negate_remainder: false,
            },
            latched: DivResult::ZERO,
            cycles: 0,
        }
    }

    /// Current phase of the control state machine.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a request is being processed.
    pub const fn is_busy(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Iteration state. Only meaningful while busy.
    pub const fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Cycles run since the last reset.
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Run one clock cycle.
    ///
    /// Outputs are driven from the state at the start of the cycle and the
    /// sampled inputs; the registers take their next values at its end.
    /// A low `reset_n` wins over everything else.
    pub fn tick(&mut self, inputs: Inputs) -> Outputs {
        if !inputs.reset_n {
            self.reset();
            return Outputs::default();
        }

        self.cycles = self.cycles.wrapping_add(1);
        let busy = self.is_busy();
        let mut done = false;

        match self.phase {
            Phase::Idle => {
                if inputs.start {
                    let dividend = word::truncate::<BITS>(inputs.dividend);
                    let divisor = word::truncate::<BITS>(inputs.divisor);

                    match precondition::<BITS>(dividend, divisor) {
                        Accepted::Terminal(result) => {
                            log::debug!(
                                "div{}: {} / {} terminated on accept: {:?}",
                                BITS,
                                word::sign_extend::<BITS>(dividend),
                                word::sign_extend::<BITS>(divisor),
                                result.status()
                            );
                            self.latched = result;
                            done = true;
                        }
                        Accepted::Iterate(registers) => {
                            log::debug!(
                                "div{}: accepted {} / {}",
                                BITS,
                                word::sign_extend::<BITS>(dividend),
                                word::sign_extend::<BITS>(divisor)
                            );
                            self.registers = registers;
                            self.phase = Phase::Iterating;
                        }
                    }
                }
            }
            Phase::Iterating => {
                if inputs.start {
                    log::trace!("div{}: request dropped while iterating", BITS);
                }

                self.registers.step::<BITS>();
                if self.registers.count == 0 {
                    self.phase = Phase::Finalize;
                }
            }
            Phase::Finalize => {
                if inputs.start {
                    log::trace!("div{}: request dropped while finalizing", BITS);
                }

                self.latched = self.registers.restore::<BITS>();
                log::debug!(
                    "div{}: completed q={} r={}",
                    BITS,
                    self.latched.quotient(),
                    self.latched.remainder()
                );
                self.phase = Phase::Idle;
                done = true;
            }
        }

        Outputs::new(&self.latched, busy, done)
    }

    /// Return to idle, clearing all registers and output flags.
    ///
    /// This is the only way to abort an in-flight division.
    pub fn reset(&mut self) {
        if self.is_busy() {
            log::debug!("div{}: reset aborted in-flight division", BITS);
        }
        *self = Self::new();
    }

    /// Compute `dividend / divisor` and `dividend % divisor` without a clock,
    /// running the same preconditioning, datapath and restoration as
    /// [`Divider::tick`].
    ///
    /// Operands are truncated to `BITS` bits. Rounds toward zero.
    pub fn div_rem(dividend: i64, divisor: i64) -> DivResult {
        const {
            assert!(BITS >= 2 && BITS <= 64, "divider width must be between 2 and 64 bits")
        };

        let dividend = word::truncate::<BITS>(dividend);
        let divisor = word::truncate::<BITS>(divisor);

        match precondition::<BITS>(dividend, divisor) {
            Accepted::Terminal(result) => result,
            Accepted::Iterate(mut registers) => {
                while registers.count > 0 {
                    registers.step::<BITS>();
                }
                registers.restore::<BITS>()
            }
        }
    }

    /// Perform checked division, returning a [`CtOption`] which `is_some` only
    /// if the divisor is non-zero and the pair is not `(MIN, -1)`.
    ///
    /// Note: this operation rounds towards zero, truncating any fractional part
    /// of the exact result.
    ///
    /// Example:
    /// ```
    /// use restoring_divider::Divider8;
    /// assert_eq!(Divider8::checked_div_rem(-7, 2).unwrap(), (-3, -1));
    /// assert!(bool::from(Divider8::checked_div_rem(-128, -1).is_none()));
    /// assert!(bool::from(Divider8::checked_div_rem(5, 0).is_none()));
    /// ```
    pub fn checked_div_rem(dividend: i64, divisor: i64) -> CtOption<(i64, i64)> {
        let result = Self::div_rem(dividend, divisor);
        CtOption::new(
            (result.quotient(), result.remainder()),
            Choice::from(u8::from(result.is_ok())),
        )
    }
}

impl<const BITS: u32> Default for Divider<BITS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const BITS: u32> Clocked for Divider<BITS> {
    type Input = Inputs;
    type Output = Outputs;

    fn tick(&mut self, input: Inputs) -> Outputs {
        Divider::tick(self, input)
    }

    fn reset(&mut self) {
        Divider::reset(self);
    }

    fn is_busy(&self) -> bool {
        Divider::is_busy(self)
    }
}

#[cfg(feature = "zeroize")]
impl<const BITS: u32> Zeroize for Divider<BITS> {
    fn zeroize(&mut self) {
        self.registers.divisor.zeroize();
        self.registers.dividend.zeroize();
        self.registers.remainder.zeroize();
        self.registers.quotient.zeroize();
        self.registers.count.zeroize();
        self.registers.negate_quotient = false;
        self.registers.negate_remainder = false;
        self.latched = DivResult::ZERO;
        self.phase = Phase::Idle;
        self.cycles = 0;
    }
}
