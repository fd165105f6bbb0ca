//! Shuffle bag container
//!
//! The bag hands back its contents in random order, one full pass at a
//! time. Insert a value more than once to weight it.

mod shuffle_bag;

pub use shuffle_bag::{ShuffleBag, ShuffleBagError};
