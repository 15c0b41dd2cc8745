//! A single guessing round
//!
//! Tracks typed input, submitted guesses and the aggregated keyboard, and
//! produces a [`RoundOutcome`] for the review scheduler once the round ends.

use crate::core::{EngineError, GuessRecord, KeyboardState, Word, WordError};
use crate::review::{ErrorPattern, RoundOutcome};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Errors raised by `Round::submit`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("the round is already over")]
    GameOver,
    #[error("guess has {got} letters, need {expected}")]
    TooShort { expected: usize, got: usize },
    #[error("invalid guess: {0}")]
    InvalidWord(#[from] WordError),
}

impl From<EngineError> for RoundError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::LengthMismatch { guess, target } => Self::TooShort {
                expected: target,
                got: guess,
            },
        }
    }
}

/// Where a round stands after a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub record: GuessRecord,
    pub status: RoundStatus,
    pub guesses_used: usize,
}

/// One round against a hidden target word
#[derive(Debug, Clone)]
pub struct Round {
    target: Word,
    guesses: Vec<GuessRecord>,
    max_guesses: usize,
    keyboard: KeyboardState,
    input: String,
    hint_used: bool,
    error_pattern: Option<ErrorPattern>,
    status: RoundStatus,
    started_at: Instant,
}

impl Round {
    /// Start a round with the default guess limit
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self::with_max_guesses(target, DEFAULT_MAX_GUESSES)
    }

    #[must_use]
    pub fn with_max_guesses(target: Word, max_guesses: usize) -> Self {
        Self {
            target,
            guesses: Vec::new(),
            max_guesses: max_guesses.max(1),
            keyboard: KeyboardState::new(),
            input: String::new(),
            hint_used: false,
            error_pattern: None,
            status: RoundStatus::InProgress,
            started_at: Instant::now(),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.max_guesses.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub const fn hint_used(&self) -> bool {
        self.hint_used
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Append a letter to the pending input
    ///
    /// Returns `false` when the round is over, the input is full or the
    /// character is not an ASCII letter.
    pub fn push_letter(&mut self, c: char) -> bool {
        if self.is_over() || !c.is_ascii_alphabetic() || self.input.len() >= self.word_length() {
            return false;
        }
        self.input.push(c.to_ascii_lowercase());
        true
    }

    /// Remove the last pending letter
    pub fn pop_letter(&mut self) -> Option<char> {
        if self.is_over() {
            return None;
        }
        self.input.pop()
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Submit the pending input as a guess
    ///
    /// On a rejected submission the input is left untouched.
    ///
    /// # Errors
    /// `GameOver` once the round has ended, `TooShort` when the input does
    /// not fill the word, `InvalidWord` when it is not a valid word.
    pub fn submit(&mut self) -> Result<SubmitResult, RoundError> {
        if self.is_over() {
            return Err(RoundError::GameOver);
        }
        if self.input.len() != self.word_length() {
            return Err(RoundError::TooShort {
                expected: self.word_length(),
                got: self.input.len(),
            });
        }

        let guess = Word::new(&self.input)?;
        let record = GuessRecord::evaluate(&guess, &self.target)?;

        self.keyboard.record(&record);
        self.guesses.push(record.clone());
        self.input.clear();

        self.status = if guess == self.target {
            RoundStatus::Won
        } else if self.guesses.len() >= self.max_guesses {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        };

        debug!(
            guess = %guess,
            feedback = %record.feedback(),
            status = ?self.status,
            "guess submitted"
        );

        Ok(SubmitResult {
            record,
            status: self.status,
            guesses_used: self.guesses.len(),
        })
    }

    /// Replace the pending input with `word` and submit it
    ///
    /// # Errors
    /// Same as [`Round::submit`].
    pub fn submit_word(&mut self, word: &str) -> Result<SubmitResult, RoundError> {
        if self.is_over() {
            return Err(RoundError::GameOver);
        }
        self.input = word.trim().to_ascii_lowercase();
        let result = self.submit();
        if result.is_err() {
            self.input.clear();
        }
        result
    }

    /// Mark this round as hinted
    pub fn use_hint(&mut self) {
        self.hint_used = true;
    }

    /// Tag this round with a recurring error pattern
    pub fn flag_error_pattern(&mut self, pattern: ErrorPattern) {
        self.error_pattern = Some(pattern);
    }

    /// Completion metrics for the scheduler
    #[must_use]
    pub fn outcome(&self, duration: Duration) -> RoundOutcome {
        RoundOutcome {
            won: self.status == RoundStatus::Won,
            guesses_used: self.guesses.len(),
            max_guesses: self.max_guesses,
            hint_used: self.hint_used,
            error_pattern: self.error_pattern,
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;

    fn round(target: &str) -> Round {
        Round::new(Word::new(target).unwrap())
    }

    #[test]
    fn typing_is_bounded_by_word_length() {
        let mut round = round("plant");
        for c in "plants".chars() {
            round.push_letter(c);
        }
        assert_eq!(round.current_input(), "plant");
        assert!(!round.push_letter('1'));
        assert_eq!(round.pop_letter(), Some('t'));
        assert_eq!(round.current_input(), "plan");
    }

    #[test]
    fn short_input_is_rejected() {
        let mut round = round("plant");
        round.push_letter('p');
        round.push_letter('l');

        assert_eq!(
            round.submit(),
            Err(RoundError::TooShort {
                expected: 5,
                got: 2
            })
        );
        assert_eq!(round.current_input(), "pl");
        assert!(round.guesses().is_empty());
    }

    #[test]
    fn winning_guess_ends_round() {
        let mut round = round("plant");
        let first = round.submit_word("crane").unwrap();
        assert_eq!(first.status, RoundStatus::InProgress);
        assert_eq!(round.keyboard().status(b'a'), Some(LetterStatus::Correct));

        let second = round.submit_word("PLANT").unwrap();
        assert_eq!(second.status, RoundStatus::Won);
        assert!(second.record.is_solved());
        assert_eq!(round.submit_word("crane"), Err(RoundError::GameOver));
        assert!(!round.push_letter('a'));
    }

    #[test]
    fn running_out_of_guesses_loses() {
        let mut round = Round::with_max_guesses(Word::new("plant").unwrap(), 2);
        round.submit_word("crane").unwrap();
        let last = round.submit_word("slate").unwrap();

        assert_eq!(last.status, RoundStatus::Lost);
        assert_eq!(last.guesses_used, 2);
        assert_eq!(round.guesses_left(), 0);
    }

    #[test]
    fn outcome_reflects_round() {
        let mut round = round("plant");
        round.use_hint();
        round.flag_error_pattern(ErrorPattern::BlendPosition);
        round.submit_word("plant").unwrap();

        let outcome = round.outcome(Duration::from_secs(40));
        assert!(outcome.won);
        assert_eq!(outcome.guesses_used, 1);
        assert_eq!(outcome.max_guesses, 6);
        assert!(outcome.hint_used);
        assert_eq!(outcome.error_pattern, Some(ErrorPattern::BlendPosition));
    }

    #[test]
    fn non_letter_word_is_invalid() {
        let mut round = round("plant");
        assert!(matches!(
            round.submit_word("pl4nt"),
            Err(RoundError::InvalidWord(_))
        ));
        assert!(round.guesses().is_empty());
    }
}
