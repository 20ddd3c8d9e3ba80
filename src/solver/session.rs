//! One solving session
//!
//! A session owns the memo cache and the current game state. The cache outlives individual
//! games: `reset` starts over from the full word list while keeping every solved history,
//! which stays valid because histories always grow from the same list.

use super::cache::MemoCache;
use super::config::SearchConfig;
use super::engine::{ScoredGuess, Solver};
use super::error::SolveError;
use super::state::SearchState;
use crate::core::{Verdict, Word, dedup_words};
use crate::oracle::Oracle;
use crate::wordlists::{WordListError, WordSource};

/// What happened on one turn of a played game
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnReport {
    pub guess: Word,
    pub score: f64,
    pub verdict: Verdict,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Summary of a played game
#[derive(Debug, Clone, PartialEq)]
pub struct GameReport {
    pub turns: Vec<TurnReport>,
    pub solved: bool,
}

impl GameReport {
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.turns.len()
    }
}

#[derive(Debug)]
pub struct Session {
    config: SearchConfig,
    words: Vec<Word>,
    state: SearchState,
    cache: MemoCache,
}

impl Session {
    /// Start a session over the distinct words in `words`, in first-occurrence order
    ///
    /// # Errors
    /// Returns `WordListUnavailable` if `words` is empty.
    pub fn new(words: Vec<Word>, config: SearchConfig) -> Result<Self, SolveError> {
        let words = dedup_words(words);
        if words.is_empty() {
            return Err(WordListError::Empty.into());
        }

        Ok(Self {
            config,
            state: SearchState::new(words.clone()),
            words,
            cache: MemoCache::new(),
        })
    }

    /// Start a session over the words a source provides
    ///
    /// # Errors
    /// Returns `WordListUnavailable` if the source fails or is empty.
    pub fn from_source(
        source: &mut impl WordSource,
        config: SearchConfig,
    ) -> Result<Self, SolveError> {
        Self::new(source.load()?, config)
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        self.state.candidates()
    }

    /// The full starting word list
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub const fn cache(&self) -> &MemoCache {
        &self.cache
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.solver().remaining_attempts(&self.state)
    }

    /// Check if the game is won or out of attempts
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_solved() || self.remaining_attempts() == 0
    }

    /// Search engine bound to this session's cache
    #[must_use]
    pub const fn solver(&self) -> Solver<'_> {
        Solver::new(self.config, &self.cache)
    }

    /// Best next guess for the current state
    ///
    /// # Errors
    /// See [`Solver::best_guess`].
    pub fn suggest(&self) -> Result<ScoredGuess, SolveError> {
        self.solver().best_guess(&self.state)
    }

    /// Every candidate guess for the current state with its expected score
    ///
    /// # Errors
    /// See [`Solver::rank_guesses`].
    pub fn rank(&self) -> Result<Vec<ScoredGuess>, SolveError> {
        self.solver().rank_guesses(&self.state)
    }

    /// Advance the game with observed feedback
    pub fn record(&mut self, guess: Word, verdict: Verdict) {
        self.state = self.state.advance(guess, verdict);
        log::debug!(
            "{guess} -> {verdict}: {} candidates remain",
            self.state.candidates().len()
        );
    }

    /// Advance the game with feedback text such as "gybbg"
    ///
    /// # Errors
    /// Returns `MalformedVerdict` without touching the state if the text is not valid
    /// feedback.
    pub fn record_feedback(&mut self, guess: Word, feedback: &str) -> Result<(), SolveError> {
        let verdict: Verdict = feedback.parse()?;
        self.record(guess, verdict);
        Ok(())
    }

    /// Drop the last recorded turn
    ///
    /// Candidates are rebuilt from the starting list; returns false if nothing was recorded.
    pub fn undo(&mut self) -> bool {
        let mut history = self.state.history().to_vec();
        if history.pop().is_none() {
            return false;
        }

        self.state = history
            .into_iter()
            .fold(SearchState::new(self.words.clone()), |state, turn| {
                state.advance(turn.guess, turn.verdict)
            });
        true
    }

    /// Start a new game, keeping the cache
    pub fn reset(&mut self) {
        self.state = SearchState::new(self.words.clone());
    }

    /// Play until solved or out of attempts, asking `oracle` for feedback on each guess
    ///
    /// # Errors
    /// Fails if the search fails (for example the oracle's feedback eliminated every word)
    /// or the oracle cannot produce feedback.
    pub fn play(&mut self, oracle: &mut impl Oracle) -> Result<GameReport, SolveError> {
        let mut turns = Vec::new();

        while !self.is_over() {
            let candidates_before = self.candidates().len();
            let suggestion = self.suggest()?;
            let verdict = oracle.feedback(&suggestion.word)?;
            self.record(suggestion.word, verdict);

            turns.push(TurnReport {
                guess: suggestion.word,
                score: suggestion.score,
                verdict,
                candidates_before,
                candidates_after: self.candidates().len(),
            });
        }

        Ok(GameReport {
            turns,
            solved: self.state.is_solved(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::SecretOracle;
    use crate::wordlists::loader::words_from_slice;

    const SMALL: &[&str] = &["abase", "abate", "abbey", "acres"];

    fn session(max_attempts: usize) -> Session {
        let config = SearchConfig::new(max_attempts).with_parallel(false);
        Session::new(words_from_slice(SMALL), config).unwrap()
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let result = Session::new(Vec::new(), SearchConfig::default());
        assert!(matches!(
            result,
            Err(SolveError::WordListUnavailable(WordListError::Empty))
        ));
    }

    #[test]
    fn repeated_words_collapse_to_first_occurrence() {
        let list = ["acres", "abase", "acres"].map(|w| Word::new(w).unwrap());
        let session = Session::new(list.to_vec(), SearchConfig::new(6)).unwrap();

        assert_eq!(session.words().len(), 2);
        assert_eq!(session.candidates()[0].as_str(), "acres");

        let single = Session::new(vec![list[0], list[0]], SearchConfig::new(6)).unwrap();
        let best = single.suggest().unwrap();
        assert_eq!(best.word.as_str(), "acres");
        assert!((best.score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn malformed_feedback_leaves_state_untouched() {
        let mut session = session(6);
        let guess = Word::new("abase").unwrap();

        for bad in ["gby", "gbyyyy", "gbxyy"] {
            let err = session.record_feedback(guess, bad).unwrap_err();
            assert!(matches!(err, SolveError::MalformedVerdict(_)));
            assert_eq!(session.candidates().len(), SMALL.len());
            assert_eq!(session.state().attempts_used(), 0);
        }
    }

    #[test]
    fn inconsistent_feedback_surfaces_empty_candidates() {
        let mut session = session(6);
        // No word in the list lacks an 'a'
        session
            .record_feedback(Word::new("abase").unwrap(), "bbbbb")
            .unwrap();

        assert!(session.candidates().is_empty());
        assert!(matches!(
            session.suggest(),
            Err(SolveError::EmptyCandidateSet)
        ));
    }

    #[test]
    fn play_against_secret() {
        let mut session = session(6);
        let mut oracle = SecretOracle::new(Word::new("acres").unwrap());

        let report = session.play(&mut oracle).unwrap();

        assert!(report.solved);
        assert_eq!(report.guesses_used(), 2);
        assert_eq!(report.turns[0].guess.as_str(), "abase");
        assert_eq!(report.turns[0].candidates_before, 4);
        assert_eq!(report.turns[0].candidates_after, 1);
        assert_eq!(report.turns[1].guess.as_str(), "acres");
        assert!(report.turns[1].verdict.is_solved());
        assert!(session.is_over());
    }

    #[test]
    fn play_stops_when_attempts_run_out() {
        let mut session = session(1);
        let mut oracle = SecretOracle::new(Word::new("acres").unwrap());

        let report = session.play(&mut oracle).unwrap();

        assert!(!report.solved);
        assert_eq!(report.guesses_used(), 1);
        assert!((report.turns[0].score - 0.25).abs() < 1e-12);
        assert_eq!(session.remaining_attempts(), 0);
    }

    #[test]
    fn undo_and_reset_restore_candidates() {
        let mut session = session(6);
        let guess = Word::new("abbey").unwrap();
        session.record_feedback(guess, "ggyyb").unwrap();
        assert_eq!(session.candidates().len(), 2);

        assert!(session.undo());
        assert_eq!(session.candidates().len(), 4);
        assert!(!session.undo());

        session.record_feedback(guess, "ggyyb").unwrap();
        let cached = session.cache().len();
        session.suggest().unwrap();
        session.reset();
        assert_eq!(session.candidates().len(), 4);
        assert!(session.cache().len() >= cached);
    }
}
