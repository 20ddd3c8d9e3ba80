//! Memoization of solved search states
//!
//! Entries are keyed by the state's history, never by its candidate list. A cache belongs to
//! one solving session: its entries are only meaningful for states that grew from the same
//! starting word list under the same [`SearchConfig`](super::SearchConfig).

use super::engine::ScoredGuess;
use super::state::Turn;
use rustc_hash::FxHashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Thread-safe map from history to the best guess found for it
#[derive(Debug, Default)]
pub struct MemoCache {
    entries: Mutex<FxHashMap<Box<[Turn]>, ScoredGuess>>,
}

impl MemoCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously solved history
    #[must_use]
    pub fn get(&self, history: &[Turn]) -> Option<ScoredGuess> {
        self.lock().get(history).copied()
    }

    /// Record the result for a history
    ///
    /// Two workers racing on the same history insert the same value, so the later write
    /// simply replaces an identical entry.
    pub fn insert(&self, history: &[Turn], best: ScoredGuess) {
        self.lock().insert(history.into(), best);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // Every critical section is a single map operation, so a poisoned map is still whole.
    fn lock(&self) -> MutexGuard<'_, FxHashMap<Box<[Turn]>, ScoredGuess>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
