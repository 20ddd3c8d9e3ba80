//! Expectation search over the game tree
//!
//! For a state, every candidate guess is scored by simulating it against every candidate
//! answer, narrowing, and recursing into the child state. A guess's score is the mean of
//! the child scores, every remaining answer being equally likely. The highest mean wins,
//! and the word list order breaks ties.

use super::cache::MemoCache;
use super::config::{SearchConfig, SearchMode};
use super::error::SolveError;
use super::state::SearchState;
use crate::core::{Verdict, Word};
use rayon::prelude::*;

/// A guess together with its expected score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    pub score: f64,
}

impl ScoredGuess {
    #[must_use]
    pub const fn new(word: Word, score: f64) -> Self {
        Self { word, score }
    }
}

/// Expectation search engine
///
/// Borrows the memo cache of the session it works for; it owns no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'c> {
    config: SearchConfig,
    cache: &'c MemoCache,
}

impl<'c> Solver<'c> {
    /// Create a solver that records results in `cache`
    #[must_use]
    pub const fn new(config: SearchConfig, cache: &'c MemoCache) -> Self {
        Self { config, cache }
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Attempts left in `state` under this solver's limit
    #[must_use]
    pub fn remaining_attempts(&self, state: &SearchState) -> usize {
        self.config
            .max_attempts
            .saturating_sub(state.attempts_used())
    }

    /// Best next guess for `state` and its expected score
    ///
    /// # Errors
    /// - `EmptyCandidateSet` if no word is consistent with the history
    /// - `AttemptsExhausted` if the history already used every attempt
    ///
    /// # Examples
    /// ```
    /// use wordle_expectation::core::Word;
    /// use wordle_expectation::solver::{MemoCache, SearchConfig, SearchState, Solver};
    ///
    /// let words: Vec<Word> = ["abase", "abate", "abbey", "acres"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let cache = MemoCache::new();
    /// let solver = Solver::new(SearchConfig::default(), &cache);
    ///
    /// let best = solver.best_guess(&SearchState::new(words)).unwrap();
    /// assert_eq!(best.word.as_str(), "abase");
    /// assert!((best.score - 1.0).abs() < 1e-12);
    /// ```
    pub fn best_guess(&self, state: &SearchState) -> Result<ScoredGuess, SolveError> {
        log::debug!(
            "searching {} candidates with {} attempts left",
            state.candidates().len(),
            self.remaining_attempts(state)
        );
        let best = self.search(state, true)?;
        log::debug!(
            "best guess {} scores {:.4} ({} states cached)",
            best.word,
            best.score,
            self.cache.len()
        );
        Ok(best)
    }

    /// Expected score of every candidate guess for `state`, in word list order
    ///
    /// With one attempt left nothing can be learned from a guess, so each candidate scores
    /// its plain chance of being the answer.
    ///
    /// # Errors
    /// Same conditions as [`Solver::best_guess`].
    pub fn rank_guesses(&self, state: &SearchState) -> Result<Vec<ScoredGuess>, SolveError> {
        let remaining = self.check_searchable(state)?;
        let candidates = state.candidates();

        if remaining == 1 {
            let score = self.last_attempt_score(state);
            return Ok(candidates
                .iter()
                .map(|&word| ScoredGuess::new(word, score))
                .collect());
        }

        self.score_guesses(state, candidates, true)
    }

    fn search(&self, state: &SearchState, root: bool) -> Result<ScoredGuess, SolveError> {
        let remaining = self.check_searchable(state)?;
        let candidates = state.candidates();

        // In root-only mode the entry state is searched more thoroughly than the same history
        // reached as an inner state, so its result must neither come from nor go to the cache.
        let memoize = !(root && self.config.mode == SearchMode::RootOnly);

        if memoize && let Some(hit) = self.cache.get(state.history()) {
            log::trace!("cache hit after {} guesses", state.attempts_used());
            return Ok(hit);
        }

        if let [only] = candidates {
            return Ok(ScoredGuess::new(*only, 1.0));
        }

        let best = if remaining == 1 {
            ScoredGuess::new(candidates[0], self.last_attempt_score(state))
        } else {
            let guesses = match self.config.mode {
                SearchMode::RootOnly if !root => &candidates[..1],
                _ => candidates,
            };
            let scored = self.score_guesses(state, guesses, root)?;
            first_maximum(&scored).ok_or(SolveError::EmptyCandidateSet)?
        };

        if memoize {
            self.cache.insert(state.history(), best);
        }
        Ok(best)
    }

    fn check_searchable(&self, state: &SearchState) -> Result<usize, SolveError> {
        if state.candidates().is_empty() {
            return Err(SolveError::EmptyCandidateSet);
        }
        match self.remaining_attempts(state) {
            0 => Err(SolveError::AttemptsExhausted),
            remaining => Ok(remaining),
        }
    }

    fn last_attempt_score(&self, state: &SearchState) -> f64 {
        1.0 / state.candidates().len() as f64
            - self.config.step_cost * state.attempts_used() as f64
    }

    fn score_guesses(
        &self,
        state: &SearchState,
        guesses: &[Word],
        root: bool,
    ) -> Result<Vec<ScoredGuess>, SolveError> {
        // Collecting keeps list order, so ties resolve the same way on any thread count
        if root && self.config.parallel {
            guesses
                .par_iter()
                .map(|&guess| self.expected_score(state, guess))
                .collect()
        } else {
            guesses
                .iter()
                .map(|&guess| self.expected_score(state, guess))
                .collect()
        }
    }

    fn expected_score(&self, state: &SearchState, guess: Word) -> Result<ScoredGuess, SolveError> {
        let candidates = state.candidates();

        let mut total = 0.0;
        for answer in candidates {
            let verdict = Verdict::compare(&guess, answer);
            let child = state.advance(guess, verdict);
            total += self.search(&child, false)?.score;
        }

        Ok(ScoredGuess::new(guess, total / candidates.len() as f64))
    }
}

/// The highest score, earliest entry on ties
fn first_maximum(scored: &[ScoredGuess]) -> Option<ScoredGuess> {
    scored.iter().copied().fold(None, |best, candidate| match best {
        Some(b) if candidate.score <= b.score => Some(b),
        _ => Some(candidate),
    })
}
