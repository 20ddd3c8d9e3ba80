//! Candidate narrowing
//!
//! Keeps only the words that agree with the feedback observed for a guess.

use super::{Mark, Verdict, Word};
use rustc_hash::FxHashSet;

/// Filter `candidates` down to the words consistent with `verdict` for `guess`
///
/// Each position narrows the result of the previous one:
/// - `Absent`: the word must not contain the guessed letter anywhere
/// - `Present`: the word must contain the letter, but not at this position
/// - `Match`: the word must have the letter at this position
///
/// Input order is preserved and the input is never modified. The result may be empty.
///
/// # Examples
/// ```
/// use wordle_expectation::core::{Verdict, Word, narrow};
///
/// let words: Vec<Word> = ["abase", "abate", "acres"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("abase").unwrap();
/// let verdict: Verdict = "gbyyy".parse().unwrap();
///
/// let remaining = narrow(&words, &guess, &verdict);
/// assert_eq!(remaining, vec![Word::new("acres").unwrap()]);
/// ```
#[must_use]
pub fn narrow(candidates: &[Word], guess: &Word, verdict: &Verdict) -> Vec<Word> {
    candidates
        .iter()
        .filter(|word| is_consistent(word, guess, verdict))
        .copied()
        .collect()
}

/// Drop repeated words, keeping each first occurrence in place
///
/// A candidate list with repeats would count one answer several times and never reach the
/// single-candidate case.
#[must_use]
pub fn dedup_words(words: impl IntoIterator<Item = Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words.into_iter().filter(|word| seen.insert(*word)).collect()
}

/// Check one word against every position of a verdict
#[must_use]
pub fn is_consistent(word: &Word, guess: &Word, verdict: &Verdict) -> bool {
    verdict
        .marks()
        .iter()
        .enumerate()
        .all(|(i, &mark)| {
            let letter = guess.letter_at(i);
            match mark {
                Mark::Absent => !word.has_letter(letter),
                Mark::Present => word.letter_at(i) != letter && word.has_letter(letter),
                Mark::Match => word.letter_at(i) == letter,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let unique = dedup_words(words(&["slate", "crane", "slate", "abase", "crane"]));
        assert_eq!(unique, words(&["slate", "crane", "abase"]));
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    const SAMPLE: &[&str] = &[
        "abase", "abate", "abbey", "acres", "crane", "slate", "irate", "speed", "erase", "robot",
        "floor", "aaaaa",
    ];

    #[test]
    fn absent_letter_removes_words_containing_it() {
        let candidates = words(&["crane", "slate", "abbey"]);
        let guess = Word::new("xxxxe").unwrap();
        let verdict: Verdict = "bbbbb".parse().unwrap();

        // Neither the guess's x nor e may appear
        assert_eq!(narrow(&candidates, &guess, &verdict), Vec::<Word>::new());

        let verdict: Verdict = "bbbbg".parse().unwrap();
        assert_eq!(
            narrow(&candidates, &guess, &verdict),
            words(&["crane", "slate"])
        );
    }

    #[test]
    fn present_letter_requires_letter_elsewhere() {
        let candidates = words(&["crane", "slate", "abbey", "acres"]);
        let guess = Word::new("exxxx").unwrap();
        let verdict: Verdict = "ybbbb".parse().unwrap();

        assert_eq!(
            narrow(&candidates, &guess, &verdict),
            words(&["crane", "slate", "abbey", "acres"])
        );

        let guess = Word::new("xxxex").unwrap();
        let verdict: Verdict = "bbbyb".parse().unwrap();
        // abbey and acres have e at position 3
        assert_eq!(
            narrow(&candidates, &guess, &verdict),
            words(&["crane", "slate"])
        );
    }

    #[test]
    fn absent_filter_ignores_repeated_letter_accounting() {
        // Absent on a letter removes every word containing it, even when another position of
        // the same guess marked that letter Match.
        let candidates = words(&["abbey", "abase"]);
        let guess = Word::new("abbbb").unwrap();
        let verdict: Verdict = "ggbbb".parse().unwrap();
        assert!(narrow(&candidates, &guess, &verdict).is_empty());
    }

    #[test]
    fn self_consistency_keeps_true_answer() {
        let candidates = words(SAMPLE);
        for guess in &candidates {
            for answer in &candidates {
                let verdict = Verdict::compare(guess, answer);
                let remaining = narrow(&candidates, guess, &verdict);
                assert!(
                    remaining.contains(answer),
                    "guess={guess}, answer={answer}, verdict={verdict}"
                );
            }
        }
    }

    #[test]
    fn narrowing_is_idempotent_and_monotone() {
        let candidates = words(SAMPLE);
        for guess in &candidates {
            for answer in &candidates {
                let verdict = Verdict::compare(guess, answer);
                let once = narrow(&candidates, guess, &verdict);
                let twice = narrow(&once, guess, &verdict);
                assert_eq!(once, twice);
                assert!(once.len() <= candidates.len());
            }
        }
    }

    #[test]
    fn solved_verdict_leaves_only_the_guess() {
        let candidates = words(SAMPLE);
        let guess = Word::new("acres").unwrap();
        assert_eq!(
            narrow(&candidates, &guess, &Verdict::SOLVED),
            vec![guess]
        );
    }

    #[test]
    fn input_is_not_modified() {
        let candidates = words(SAMPLE);
        let before = candidates.clone();
        let guess = Word::new("crane").unwrap();
        let _ = narrow(&candidates, &guess, &"bbbbb".parse().unwrap());
        assert_eq!(candidates, before);
    }
}
