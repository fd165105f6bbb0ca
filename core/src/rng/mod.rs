//! Random number generation for draw selection
//!
//! All randomness used by a bag goes through the [`RandomSource`] trait:
//! an entropy-seeded [`rand::rngs::StdRng`] by default, or the
//! deterministic [`SeededRng`] when draw sequences must be reproducible.

mod source;
mod xorshift;

pub use source::RandomSource;
pub use xorshift::SeededRng;
