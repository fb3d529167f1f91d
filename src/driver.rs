//! Request/response handshake on top of a [`Clocked`] divider.

use crate::{Clocked, DivResult, Error, Inputs, Outputs};

/// Default number of cycles [`Driver::wait`] allows for a completion pulse.
///
/// Covers the latency of the widest supported divider with room to spare.
pub const DEFAULT_TIMEOUT: u64 = 2 * 64 + 4;

/// Drives a divider through the accept/complete handshake.
///
/// The driver pulses `start` for exactly one cycle, then clocks idle cycles
/// until the completion pulse, giving up after a bounded number of cycles
/// instead of spinning on a unit that never finishes.
#[derive(Debug)]
pub struct Driver<'a, D> {
    unit: &'a mut D,
    timeout: u64,
    pending: Option<DivResult>,
}

impl<'a, D> Driver<'a, D>
where
    D: Clocked<Input = Inputs, Output = Outputs>,
{
    /// Wrap `unit` with the [`DEFAULT_TIMEOUT`].
    pub fn new(unit: &'a mut D) -> Self {
        Self {
            unit,
            timeout: DEFAULT_TIMEOUT,
            pending: None,
        }
    }

    /// Use `cycles` as the bound for [`Driver::wait`].
    pub fn with_timeout(mut self, cycles: u64) -> Self {
        self.timeout = cycles;
        self
    }

    /// Bound used by [`Driver::wait`].
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /// The driven unit.
    pub fn unit(&self) -> &D {
        &*self.unit
    }

    /// Issue the one-cycle accept pulse for `dividend / divisor`.
    ///
    /// Returns [`Error::Busy`] without clocking the unit if it is still
    /// processing a request or a completed result has not been collected.
    pub fn submit(&mut self, dividend: i64, divisor: i64) -> Result<(), Error> {
        if self.unit.is_busy() || self.pending.is_some() {
            return Err(Error::Busy);
        }

        let outputs = self.unit.tick(Inputs::start(dividend, divisor));
        // Terminal cases complete on the accept cycle itself.
        self.pending = outputs.result();
        Ok(())
    }

    /// Clock idle cycles until the completion pulse.
    pub fn wait(&mut self) -> Result<DivResult, Error> {
        if let Some(result) = self.pending.take() {
            return Ok(result);
        }

        for _ in 0..self.timeout {
            if let Some(result) = self.unit.tick(Inputs::idle()).result() {
                return Ok(result);
            }
        }

        log::debug!("driver: no completion pulse within {} cycles", self.timeout);
        Err(Error::Timeout {
            cycles: self.timeout,
        })
    }

    /// Submit `dividend / divisor` and wait for its completion.
    pub fn divide(&mut self, dividend: i64, divisor: i64) -> Result<DivResult, Error> {
        self.submit(dividend, divisor)?;
        self.wait()
    }

    /// Like [`Driver::divide`], mapping the error and overflow flags to [`Error`].
    pub fn div_rem(&mut self, dividend: i64, divisor: i64) -> Result<(i64, i64), Error> {
        self.divide(dividend, divisor)?.into_result()
    }

    /// Drive a single reset cycle, discarding any in-flight or uncollected result.
    pub fn reset(&mut self) {
        self.pending = None;
        self.unit.tick(Inputs::reset());
    }
}
