//! The ShuffleBag container
//!
//! An ordered backing sequence plus a cursor separating the undrawn pool
//! `[0, cursor]` from the already-drawn tail. A draw picks a random slot
//! below the cursor, parks the drawn ticket at the cursor position with a
//! swap, and shrinks the pool by one. When the pool is down to a single
//! slot, the next draw returns whatever sits at index 0 and resets the
//! pool over the whole sequence, starting the next cycle.
//!
//! # Critical Invariants
//!
//! 1. Every ticket present at cycle start is returned exactly once per
//!    cycle of draws
//! 2. Tickets are never removed; `add` is the only structural mutation
//! 3. `cursor` is `None` only before the first `add`; afterwards it
//!    always indexes into the backing sequence
//! 4. Both operations run entirely under the bag's lock, so no caller
//!    ever observes a half-updated cursor/items pair

use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::rng::{RandomSource, SeededRng};

/// Errors that can occur when drawing from a bag
#[derive(Debug, Error, PartialEq)]
pub enum ShuffleBagError {
    #[error("Cannot draw from an empty bag")]
    EmptyContainer,
}

/// A thread-safe randomized-selection container.
///
/// Tickets are returned in random order, each exactly once per cycle,
/// with cycles restarting automatically. Duplicate tickets are the
/// weighting mechanism: a value inserted twice comes out twice per cycle.
///
/// The bag takes `&self` for both operations and serializes them behind
/// an internal lock, so a single instance can be shared across threads
/// via [`std::sync::Arc`].
///
/// # Example
/// ```
/// use shuffle_bag_core_rs::ShuffleBag;
///
/// let bag = ShuffleBag::seeded(42);
/// bag.add("thunder");
/// bag.add("thunder");
/// bag.add("rain");
///
/// // Each cycle of three draws returns both "thunder" tickets and the
/// // single "rain" ticket exactly once.
/// let mut cycle: Vec<&str> = (0..3).map(|_| bag.next_item().unwrap()).collect();
/// cycle.sort();
/// assert_eq!(cycle, vec!["rain", "thunder", "thunder"]);
/// ```
pub struct ShuffleBag<T, R = StdRng> {
    state: Mutex<BagState<T, R>>,
}

/// Everything a draw reads or writes, guarded as one unit.
struct BagState<T, R> {
    /// Backing storage. `[0, cursor]` is the undrawn pool for the current
    /// cycle; slots above `cursor` hold already-drawn tickets in a
    /// now-irrelevant order.
    items: Vec<T>,

    /// Inclusive upper bound of the undrawn pool. `None` until the first
    /// `add`.
    cursor: Option<usize>,

    /// Source of random indices for the selection branch.
    rng: R,
}

impl<T> ShuffleBag<T> {
    /// Create an empty bag with a process-seeded random source.
    ///
    /// Draw order is different on every run. Use [`ShuffleBag::seeded`]
    /// when the sequence must be reproducible.
    ///
    /// # Example
    /// ```
    /// use shuffle_bag_core_rs::{ShuffleBag, ShuffleBagError};
    ///
    /// let bag: ShuffleBag<u32> = ShuffleBag::new();
    /// assert_eq!(bag.next_item(), Err(ShuffleBagError::EmptyContainer));
    /// ```
    pub fn new() -> Self {
        Self::with_source(StdRng::from_entropy())
    }
}

impl<T> Default for ShuffleBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ShuffleBag<T, SeededRng> {
    /// Create an empty bag with a deterministic, seeded random source.
    ///
    /// Same seed + same call sequence = same draw order.
    ///
    /// # Example
    /// ```
    /// use shuffle_bag_core_rs::ShuffleBag;
    ///
    /// let first = ShuffleBag::seeded(7);
    /// let second = ShuffleBag::seeded(7);
    /// for i in 0..10 {
    ///     first.add(i);
    ///     second.add(i);
    /// }
    /// for _ in 0..30 {
    ///     assert_eq!(first.next_item(), second.next_item());
    /// }
    /// ```
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(SeededRng::new(seed))
    }
}

impl<T, R: RandomSource> ShuffleBag<T, R> {
    /// Create an empty bag drawing random indices from `source`.
    ///
    /// Any [`rand::RngCore`] generator qualifies as a source through the
    /// blanket [`RandomSource`] impl.
    pub fn with_source(source: R) -> Self {
        Self {
            state: Mutex::new(BagState {
                items: Vec::new(),
                cursor: None,
                rng: source,
            }),
        }
    }

    /// Add one ticket to the bag.
    ///
    /// The cursor snaps to the new last index, so the *whole* collection
    /// (not just the new ticket) re-enters the undrawn pool: adding
    /// mid-cycle restarts pool coverage over the full, larger sequence.
    /// Cannot fail.
    pub fn add(&self, item: T) {
        let mut state = self.lock_state();
        state.items.push(item);
        state.cursor = Some(state.items.len() - 1);
    }

    /// Draw the next ticket.
    ///
    /// While the pool spans more than one slot, a uniformly random slot
    /// strictly below the cursor is selected, its ticket is parked at the
    /// cursor position with a swap, and the pool shrinks by one. Once the
    /// pool is down to a single slot, the draw returns the ticket at
    /// index 0 without moving it and resets the pool over the entire
    /// backing sequence — the cycle-restart draw.
    ///
    /// Returns [`ShuffleBagError::EmptyContainer`] if nothing was ever
    /// added; no other failure exists.
    ///
    /// # Example
    /// ```
    /// use shuffle_bag_core_rs::ShuffleBag;
    ///
    /// let bag = ShuffleBag::seeded(1);
    /// bag.add("x");
    /// // A one-ticket bag cycles forever on that ticket.
    /// for _ in 0..5 {
    ///     assert_eq!(bag.next_item(), Ok("x"));
    /// }
    /// ```
    pub fn next_item(&self) -> Result<T, ShuffleBagError>
    where
        T: Clone,
    {
        let mut state = self.lock_state();
        if state.items.is_empty() {
            return Err(ShuffleBagError::EmptyContainer);
        }
        match state.cursor {
            // Pool exhausted (or never wider than one slot): hand out
            // whatever sits at index 0, unmoved, and respan the pool over
            // the whole sequence for the next cycle.
            None | Some(0) => {
                state.cursor = Some(state.items.len() - 1);
                Ok(state.items[0].clone())
            }
            Some(cursor) => {
                // The cursor slot itself is excluded from selection; it
                // is where the drawn ticket gets parked.
                let picked = state.rng.range(0, cursor);
                let result = state.items[picked].clone();
                state.items.swap(cursor, picked);
                state.cursor = Some(cursor - 1);
                Ok(result)
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, BagState<T, R>> {
        // Neither operation can panic between related writes, so state
        // behind a poisoned lock is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_of<T, R>(bag: &ShuffleBag<T, R>) -> Option<usize> {
        bag.state.lock().unwrap().cursor
    }

    #[test]
    fn test_add_snaps_cursor_to_last_index() {
        let bag = ShuffleBag::seeded(1);
        bag.add('a');
        assert_eq!(cursor_of(&bag), Some(0));
        bag.add('b');
        assert_eq!(cursor_of(&bag), Some(1));
        bag.add('c');
        assert_eq!(cursor_of(&bag), Some(2));
    }

    #[test]
    fn test_draw_decrements_cursor_then_restart_respans() {
        let bag = ShuffleBag::seeded(1);
        for item in ["a", "b", "c"] {
            bag.add(item);
        }
        bag.next_item().unwrap();
        assert_eq!(cursor_of(&bag), Some(1));
        bag.next_item().unwrap();
        assert_eq!(cursor_of(&bag), Some(0));
        // restart draw spans the whole backing sequence again
        bag.next_item().unwrap();
        assert_eq!(cursor_of(&bag), Some(2));
    }

    #[test]
    fn test_add_mid_cycle_snaps_cursor_over_whole_sequence() {
        let bag = ShuffleBag::seeded(1);
        bag.add(1);
        bag.add(2);
        bag.next_item().unwrap();
        assert_eq!(cursor_of(&bag), Some(0));
        bag.add(3);
        assert_eq!(cursor_of(&bag), Some(2));
    }

    #[test]
    fn test_restart_draw_returns_slot_zero_in_place() {
        let bag = ShuffleBag::seeded(5);
        bag.add("x");
        bag.add("y");
        // the only selectable slot below cursor 1 is 0, so this draw is
        // forced: it returns "x" and parks it at index 1
        assert_eq!(bag.next_item(), Ok("x"));
        let slot_zero = bag.state.lock().unwrap().items[0];
        let restart = bag.next_item().unwrap();
        assert_eq!(restart, slot_zero);
        assert_eq!(bag.state.lock().unwrap().items[0], slot_zero);
    }

    #[test]
    fn test_empty_bag_draw_fails_repeatedly() {
        let bag: ShuffleBag<u8, _> = ShuffleBag::seeded(1);
        assert_eq!(bag.next_item(), Err(ShuffleBagError::EmptyContainer));
        assert_eq!(bag.next_item(), Err(ShuffleBagError::EmptyContainer));
    }
}
