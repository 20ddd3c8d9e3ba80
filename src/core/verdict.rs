//! Per-letter feedback for a guess
//!
//! A verdict holds one [`Mark`] per letter position. It is produced either by comparing a
//! guess against a known answer, or by parsing the textual feedback protocol where
//! `g` = match, `y` = present and `b` = absent.
//!
//! Comparison uses the simplified rule: a letter that is not a match is `Present` whenever
//! it occurs anywhere in the answer. Repeated letters are not counted per occurrence.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter in the correct position (green)
    Match,
    /// Letter in the word, elsewhere (yellow)
    Present,
    /// Letter not in the word (gray)
    Absent,
}

impl Mark {
    /// Parse a protocol symbol: `g`, `y` or `b` (case-insensitive)
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            'g' => Some(Self::Match),
            'y' => Some(Self::Present),
            'b' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Protocol symbol for this mark
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Match => 'g',
            Self::Present => 'y',
            Self::Absent => 'b',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Match => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Rejected feedback text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerdictError {
    #[error("feedback must have exactly {expected} symbols, got {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("unrecognized feedback symbol '{0}' (use g, y or b)")]
    UnknownSymbol(char),
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict([Mark; WORD_LENGTH]);

impl Verdict {
    /// All letters matched
    pub const SOLVED: Self = Self([Mark::Match; WORD_LENGTH]);

    /// Feedback for guessing `guess` when `answer` is the hidden word
    ///
    /// # Examples
    /// ```
    /// use wordle_expectation::core::{Mark, Verdict, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let verdict = Verdict::compare(&guess, &answer);
    ///
    /// assert_eq!(verdict.to_string(), "bbgbg");
    /// assert_eq!(verdict.marks()[2], Mark::Match);
    /// ```
    #[must_use]
    pub fn compare(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            *mark = if letter == answer.letter_at(i) {
                Mark::Match
            } else if answer.has_letter(letter) {
                Mark::Present
            } else {
                Mark::Absent
            };
        }
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position matched
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Render as emoji squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl std::str::FromStr for Verdict {
    type Err = VerdictError;

    /// Parse feedback text like "gybbg"
    ///
    /// Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(VerdictError::WrongLength {
                expected: WORD_LENGTH,
                found: symbols.len(),
            });
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, &symbol) in marks.iter_mut().zip(&symbols) {
            *mark = Mark::from_symbol(symbol).ok_or(VerdictError::UnknownSymbol(symbol))?;
        }
        Ok(Self(marks))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}
