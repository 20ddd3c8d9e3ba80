//! Word solving command
//!
//! Plays a full game against a known secret and returns the solution path.

use crate::core::Word;
use crate::oracle::SecretOracle;
use crate::solver::{GameReport, Session};
use anyhow::{Context, Result};

/// Result of solving a word
pub struct SolveResult {
    pub secret: Word,
    pub report: GameReport,
}

/// Solve `secret` from the session's starting state
///
/// The session is reset first, so its cache can be reused across calls.
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid word
/// - The search fails, e.g. because the secret is missing from the word list and every
///   candidate got eliminated
pub fn solve_word(session: &mut Session, secret: &str) -> Result<SolveResult> {
    let secret = Word::new(secret).with_context(|| format!("invalid secret word '{secret}'"))?;

    if !session.words().contains(&secret) {
        log::warn!("secret '{secret}' is not in the word list; the search may run dry");
    }

    session.reset();
    let report = session
        .play(&mut SecretOracle::new(secret))
        .with_context(|| format!("failed while solving '{secret}'"))?;

    Ok(SolveResult { secret, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SearchConfig;
    use crate::wordlists::loader::words_from_slice;

    const WORDS: &[&str] = &[
        "crane", "slate", "irate", "grate", "crate", "plate", "trace", "react", "caret", "cater",
        "spare", "share",
    ];

    fn session() -> Session {
        let config = SearchConfig::new(4).with_parallel(false);
        Session::new(words_from_slice(WORDS), config).unwrap()
    }

    #[test]
    fn solve_word_succeeds() {
        let mut session = session();
        let result = solve_word(&mut session, "share").unwrap();

        assert_eq!(result.secret.as_str(), "share");
        assert!(result.report.solved);
        assert!(result.report.guesses_used() <= 4);
        assert_eq!(
            result.report.turns.last().map(|t| t.guess.as_str()),
            Some("share")
        );
    }

    #[test]
    fn solve_records_history() {
        let mut session = session();
        let result = solve_word(&mut session, "caret").unwrap();

        for step in &result.report.turns {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn solve_reuses_session() {
        let mut session = session();
        for secret in WORDS {
            assert!(solve_word(&mut session, secret).unwrap().report.solved);
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let mut session = session();
        assert!(solve_word(&mut session, "zz").is_err());
    }
}
