//! A point in the game tree
//!
//! A [`SearchState`] pairs the guesses made so far with the words still consistent with
//! them. Identity is the history alone: two states with the same history compare equal and
//! hash alike regardless of their candidate lists. The candidates are carried along so they
//! never have to be re-derived from the starting word list.

use crate::core::{Verdict, Word, dedup_words, narrow};
use std::hash::{Hash, Hasher};

/// One guess and the feedback that followed it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Turn {
    pub guess: Word,
    pub verdict: Verdict,
}

/// Immutable (history, candidates) snapshot
#[derive(Debug, Clone)]
pub struct SearchState {
    history: Vec<Turn>,
    candidates: Vec<Word>,
}

impl SearchState {
    /// Start of a game: no guesses, every distinct word possible
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            history: Vec::new(),
            candidates: dedup_words(words),
        }
    }

    /// Build a state from an explicit history and its already-narrowed candidates
    #[must_use]
    pub const fn from_parts(history: Vec<Turn>, candidates: Vec<Word>) -> Self {
        Self {
            history,
            candidates,
        }
    }

    /// The child state after playing `guess` and observing `verdict`
    #[must_use]
    pub fn advance(&self, guess: Word, verdict: Verdict) -> Self {
        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(Turn { guess, verdict });

        Self {
            history,
            candidates: narrow(&self.candidates, &guess, &verdict),
        }
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    /// Check if the last recorded guess was solved
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(|turn| turn.verdict.is_solved())
    }
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.history == other.history
    }
}

impl Eq for SearchState {}

impl Hash for SearchState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.history.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn advance_narrows_and_extends_history() {
        let root = SearchState::new(words(&["abase", "abate", "abbey", "acres"]));
        let guess = Word::new("abase").unwrap();
        let answer = Word::new("acres").unwrap();

        let child = root.advance(guess, Verdict::compare(&guess, &answer));

        assert_eq!(child.attempts_used(), 1);
        assert_eq!(child.history()[0].guess, guess);
        assert_eq!(child.candidates(), &[answer]);
        // Parent is untouched
        assert_eq!(root.attempts_used(), 0);
        assert_eq!(root.candidates().len(), 4);
    }

    #[test]
    fn new_state_drops_repeated_words() {
        let root = SearchState::new(words(&["acres", "abase", "acres"]));
        assert_eq!(root.candidates(), words(&["acres", "abase"]).as_slice());
    }

    #[test]
    fn equality_ignores_candidates() {
        let guess = Word::new("crane").unwrap();
        let turn = Turn {
            guess,
            verdict: "bbgbg".parse().unwrap(),
        };
        let a = SearchState::from_parts(vec![turn], words(&["slate"]));
        let b = SearchState::from_parts(vec![turn], words(&["slate", "abate"]));
        let c = SearchState::from_parts(Vec::new(), words(&["slate"]));

        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }

    #[test]
    fn history_order_matters() {
        let first = Turn {
            guess: Word::new("crane").unwrap(),
            verdict: "bbbbb".parse().unwrap(),
        };
        let second = Turn {
            guess: Word::new("slate").unwrap(),
            verdict: "bbbbb".parse().unwrap(),
        };
        let a = SearchState::from_parts(vec![first, second], Vec::new());
        let b = SearchState::from_parts(vec![second, first], Vec::new());
        assert_ne!(a, b);
    }

    #[test]
    fn solved_after_matching_guess() {
        let root = SearchState::new(words(&["abase", "acres"]));
        assert!(!root.is_solved());

        let guess = Word::new("acres").unwrap();
        let child = root.advance(guess, Verdict::SOLVED);
        assert!(child.is_solved());
    }
}
