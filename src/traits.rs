//! Traits provided by this crate.

#[cfg(feature = "rand_core")]
use rand_core::RngCore;

/// A synchronous unit advanced one clock cycle at a time.
pub trait Clocked {
    /// Signals sampled on each cycle.
    type Input;

    /// Signals driven on each cycle.
    type Output;

    /// Run one clock cycle: sample `input`, produce this cycle's outputs and
    /// latch the next state.
    fn tick(&mut self, input: Self::Input) -> Self::Output;

    /// Return to the idle state, discarding any in-flight work.
    fn reset(&mut self);

    /// Whether a previously accepted request is still being processed.
    fn is_busy(&self) -> bool;
}

/// Random value generation support.
#[cfg(feature = "rand_core")]
pub trait Random: Sized {
    /// Generate a uniformly distributed random value.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;
}
