//! xorshift64* random number generator
//!
//! Fast deterministic PRNG with 64-bit state and 64-bit output; the
//! variant passes TestU01's BigCrush statistical tests.
//!
//! # Determinism
//!
//! Same seed → same sequence of draws. This is what makes shuffle cycles
//! replayable in tests and debugging sessions.
//!
//! The generator implements [`rand::RngCore`], so it plugs into
//! [`RandomSource`](crate::RandomSource) through the blanket impl
//! alongside every other `rand` generator.

use rand::{Error as RandError, RngCore};
use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use shuffle_bag_core_rs::SeededRng;
///
/// let mut rng = SeededRng::new(12345);
/// let first = rng.next();
/// let second = rng.next();
/// assert_ne!(first, second);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeededRng {
    /// Internal state (64-bit), never zero
    state: u64,
}

impl SeededRng {
    /// Create a new generator from a seed.
    ///
    /// A zero seed is coerced to 1 (xorshift requires nonzero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Advance the state and return the next random u64.
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Current state, for snapshotting a draw position.
    ///
    /// Feeding the snapshot back into [`SeededRng::new`] resumes the
    /// sequence from this exact point.
    ///
    /// # Example
    /// ```
    /// use shuffle_bag_core_rs::SeededRng;
    ///
    /// let mut rng = SeededRng::new(12345);
    /// rng.next();
    /// let mut replay = SeededRng::new(rng.get_state());
    /// assert_eq!(rng.next(), replay.next());
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        (SeededRng::next(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        SeededRng::next(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = SeededRng::next(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}
