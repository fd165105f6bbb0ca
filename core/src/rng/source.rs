//! Random source abstraction
//!
//! The bag needs exactly one capability from its generator: a uniformly
//! distributed integer in a half-open range. Every [`rand::RngCore`]
//! generator qualifies through the blanket impl, so callers can inject
//! [`SeededRng`](crate::SeededRng) for reproducible draws, `StdRng` for
//! process-seeded draws, or anything else from the `rand` ecosystem.

use rand::{Rng, RngCore};

/// A stateful source of uniformly distributed integers.
pub trait RandomSource {
    /// Uniform integer in `[min, max)`.
    ///
    /// # Panics
    /// Panics if `min >= max`.
    fn range(&mut self, min: usize, max: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    fn range(&mut self, min: usize, max: usize) -> usize {
        assert!(min < max, "min must be less than max");
        self.gen_range(min..max)
    }
}
