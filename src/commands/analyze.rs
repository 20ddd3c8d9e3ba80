//! Opening analysis command
//!
//! Scores every candidate guess from the start of a game.

use crate::solver::{ScoredGuess, Session};
use anyhow::Result;
use std::time::{Duration, Instant};

/// Result of ranking the opening guesses
pub struct AnalysisResult {
    pub total_candidates: usize,
    /// Best first; ties keep word list order
    pub ranked: Vec<ScoredGuess>,
    pub duration: Duration,
    pub cached_states: usize,
}

/// Rank every opening guess by expected score
///
/// # Errors
///
/// Returns an error if the search fails.
pub fn analyze_openings(session: &mut Session) -> Result<AnalysisResult> {
    session.reset();
    let start = Instant::now();

    let mut ranked = session.rank()?;
    // Stable sort keeps list order among equal scores
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(AnalysisResult {
        total_candidates: session.candidates().len(),
        ranked,
        duration: start.elapsed(),
        cached_states: session.cache().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SearchConfig;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn analysis_ranks_every_candidate() {
        let words = words_from_slice(&["abbey", "abase", "abate", "acres"]);
        let mut session = Session::new(words, SearchConfig::new(2).with_parallel(false)).unwrap();

        let result = analyze_openings(&mut session).unwrap();

        assert_eq!(result.total_candidates, 4);
        let order: Vec<&str> = result.ranked.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(order, ["abase", "abate", "acres", "abbey"]);
        assert!(result.cached_states > 0);
    }

    #[test]
    fn best_ranked_matches_suggestion() {
        let words = words_from_slice(&[
            "crane", "slate", "irate", "grate", "crate", "plate", "trace", "react", "caret",
            "cater", "spare", "share",
        ]);
        let mut session = Session::new(words, SearchConfig::new(2)).unwrap();

        let result = analyze_openings(&mut session).unwrap();
        let suggestion = session.suggest().unwrap();

        assert_eq!(result.ranked[0], suggestion);
    }
}
