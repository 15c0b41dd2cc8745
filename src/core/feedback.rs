//! Guess evaluation and per-letter feedback
//!
//! Feedback is an ordered vector of letter statuses, one per position:
//! - Absent (letter not in word, or no unclaimed occurrence left)
//! - Present (letter in word, wrong position)
//! - Correct (letter in correct position)

use super::{EngineError, Word};
use std::fmt;

/// Status of a single guessed letter
///
/// Ordered from least to most informative so that `max` folds keep the best state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Is this letter credited as occurring in the target?
    #[inline]
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Present | Self::Correct)
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single ASCII code used by the text pattern format
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    fn from_code(ch: char) -> Option<Self> {
        Some(match ch {
            'G' | 'g' | '🟩' => Self::Correct,
            'Y' | 'y' | '🟨' => Self::Present,
            '-' | '_' | '.' | '⬜' | '⬛' => Self::Absent,
            _ => return None,
        })
    }
}

/// Feedback for one guess, one status per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterStatus>);

impl Feedback {
    #[must_use]
    pub const fn new(statuses: Vec<LetterStatus>) -> Self {
        Self(statuses)
    }

    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Number of positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/⬜/⬛ for absent
    ///
    /// # Examples
    /// ```
    /// use wordquest_engine::core::{Feedback, LetterStatus};
    ///
    /// let p1 = Feedback::parse("GY-").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1.statuses()[1], LetterStatus::Present);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let statuses = s
            .trim()
            .chars()
            .map(LetterStatus::from_code)
            .collect::<Option<Vec<_>>>()?;

        if statuses.is_empty() {
            return None;
        }

        Some(Self(statuses))
    }

    /// Convert feedback to an emoji string
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

/// Evaluate `guess` against `target`
///
/// Implements Wordle's exact feedback rules, including proper handling of
/// duplicate letters: a letter is never credited more times than it occurs
/// in the target.
///
/// # Algorithm
/// 1. First pass: mark exact matches correct and remove them from the available pool
/// 2. Second pass: mark remaining guess letters present while the pool still holds them
///
/// # Errors
/// Returns `EngineError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordquest_engine::core::{evaluate, Word};
///
/// let guess = Word::new("llama").unwrap();
/// let target = Word::new("alloy").unwrap();
/// let feedback = evaluate(&guess, &target).unwrap();
///
/// // The second A finds no unclaimed A left in ALLOY
/// assert_eq!(feedback.to_string(), "YGY--");
/// ```
pub fn evaluate(guess: &Word, target: &Word) -> Result<Feedback, EngineError> {
    if guess.len() != target.len() {
        return Err(EngineError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let guess_letters = guess.letters();
    let target_letters = target.letters();
    let mut result = vec![LetterStatus::Absent; guess.len()];
    let mut available = target.letter_counts();

    // First pass: exact position matches
    for (i, (&g, &t)) in guess_letters.iter().zip(target_letters).enumerate() {
        if g == t {
            result[i] = LetterStatus::Correct;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, letter still unclaimed
    for (i, &g) in guess_letters.iter().enumerate() {
        if result[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            result[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    Ok(Feedback(result))
}

/// One submitted guess paired with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    guess: Word,
    feedback: Feedback,
}

impl GuessRecord {
    /// Pair a guess with externally supplied feedback
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if the feedback does not cover every letter.
    pub fn new(guess: Word, feedback: Feedback) -> Result<Self, EngineError> {
        if guess.len() != feedback.len() {
            return Err(EngineError::LengthMismatch {
                guess: guess.len(),
                target: feedback.len(),
            });
        }
        Ok(Self { guess, feedback })
    }

    /// Evaluate `guess` against `target` and record the result
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if the words differ in length.
    pub fn evaluate(guess: &Word, target: &Word) -> Result<Self, EngineError> {
        let feedback = evaluate(guess, target)?;
        Ok(Self {
            guess: guess.clone(),
            feedback,
        })
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.is_solved()
    }

    /// Pairs of (letter, status) in position order
    pub fn letters(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        self.guess
            .letters()
            .iter()
            .copied()
            .zip(self.feedback.statuses().iter().copied())
    }

    /// Occurrences of `letter` in this guess credited as present or correct
    #[must_use]
    pub fn positive_count(&self, letter: u8) -> usize {
        self.letters()
            .filter(|&(l, s)| l == letter && s.is_positive())
            .count()
    }

    /// Occurrences of `letter` typed in this guess
    #[must_use]
    pub fn typed_count(&self, letter: u8) -> usize {
        self.guess.count_of(letter)
    }
}
