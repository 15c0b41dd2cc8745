//! Constraint model derived from a round's guess history
//!
//! Mirrors the bookkeeping a player does mentally: which letters are pinned to
//! a position, which positions a letter is ruled out of, and lower/upper bounds
//! on how many times each letter occurs in the secret word.

use crate::core::{EngineError, GuessRecord, LetterStatus, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Positional and count constraints accumulated over a round
///
/// Rebuilt from the full history on every request; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintModel {
    /// Confirmed letter per position
    pub fixed_letters: Vec<Option<u8>>,
    /// Letters proven wrong at each exact position
    pub excluded_by_position: Vec<FxHashSet<u8>>,
    /// Lower bound on occurrences in the secret word
    pub min_counts: FxHashMap<u8, usize>,
    /// Upper bound, only present when some guess over-typed the letter
    pub max_counts: FxHashMap<u8, usize>,
    /// Letters typed at least once but never credited
    pub absent_letters: FxHashSet<u8>,
    /// Every letter typed so far
    pub guessed_letters: FxHashSet<u8>,
    pub length: usize,
    pub guess_count: usize,
}

impl ConstraintModel {
    /// A model with no information for words of `length` letters
    #[must_use]
    pub fn empty(length: usize) -> Self {
        Self {
            fixed_letters: vec![None; length],
            excluded_by_position: vec![FxHashSet::default(); length],
            min_counts: FxHashMap::default(),
            max_counts: FxHashMap::default(),
            absent_letters: FxHashSet::default(),
            guessed_letters: FxHashSet::default(),
            length,
            guess_count: 0,
        }
    }

    /// Derive the model from an ordered guess history
    ///
    /// Count bounds use per-guess tallies: a letter typed twice with one
    /// occurrence correct and one absent gives `min = max = 1`, which a global
    /// tally across guesses would get wrong.
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if any record is not `length` letters.
    pub fn from_records(length: usize, records: &[GuessRecord]) -> Result<Self, EngineError> {
        let mut model = Self::empty(length);

        for record in records {
            if record.guess().len() != length {
                return Err(EngineError::LengthMismatch {
                    guess: record.guess().len(),
                    target: length,
                });
            }
            model.absorb(record);
        }

        model.absent_letters = model
            .guessed_letters
            .iter()
            .filter(|letter| !model.min_counts.contains_key(letter))
            .copied()
            .collect();

        for (i, fixed) in model.fixed_letters.iter().enumerate() {
            if let Some(letter) = fixed {
                model.excluded_by_position[i].remove(letter);
            }
        }

        Ok(model)
    }

    fn absorb(&mut self, record: &GuessRecord) {
        self.guess_count += 1;

        let mut positive: FxHashMap<u8, usize> = FxHashMap::default();
        let mut typed: FxHashMap<u8, usize> = FxHashMap::default();

        for (i, (letter, status)) in record.letters().enumerate() {
            self.guessed_letters.insert(letter);
            *typed.entry(letter).or_insert(0) += 1;

            match status {
                LetterStatus::Correct => {
                    self.fixed_letters[i] = Some(letter);
                    *positive.entry(letter).or_insert(0) += 1;
                }
                LetterStatus::Present => {
                    self.excluded_by_position[i].insert(letter);
                    *positive.entry(letter).or_insert(0) += 1;
                }
                LetterStatus::Absent => {
                    self.excluded_by_position[i].insert(letter);
                }
            }
        }

        for (&letter, &total) in &typed {
            let credited = positive.get(&letter).copied().unwrap_or(0);

            if credited > 0 {
                let min = self.min_counts.entry(letter).or_insert(0);
                *min = (*min).max(credited);
            }

            if total > credited {
                self.max_counts
                    .entry(letter)
                    .and_modify(|max| *max = (*max).min(credited))
                    .or_insert(credited);
            }
        }
    }

    /// Letter is known to occur at least once
    #[must_use]
    pub fn is_positive(&self, letter: u8) -> bool {
        self.min_counts.get(&letter).is_some_and(|&n| n > 0)
    }

    /// Letter has been typed in some guess
    #[must_use]
    pub fn is_tested(&self, letter: u8) -> bool {
        self.guessed_letters.contains(&letter)
    }

    /// Positions with a confirmed letter
    #[must_use]
    pub fn known_positions(&self) -> usize {
        self.fixed_letters.iter().filter(|f| f.is_some()).count()
    }
}

/// Evaluate each guess against `target` and build the resulting model
///
/// # Errors
/// Returns `EngineError::LengthMismatch` if any guess differs in length from `target`.
///
/// # Examples
/// ```
/// use wordquest_engine::core::Word;
/// use wordquest_engine::suggest::build_constraint_model;
///
/// let target = Word::new("plant").unwrap();
/// let guesses = vec![Word::new("crane").unwrap()];
/// let model = build_constraint_model(&guesses, &target).unwrap();
///
/// assert_eq!(model.fixed_letters[2], Some(b'a'));
/// assert!(model.absent_letters.contains(&b'c'));
/// ```
pub fn build_constraint_model(
    guesses: &[Word],
    target: &Word,
) -> Result<ConstraintModel, EngineError> {
    let records = guesses
        .iter()
        .map(|guess| GuessRecord::evaluate(guess, target))
        .collect::<Result<Vec<_>, _>>()?;

    ConstraintModel::from_records(target.len(), &records)
}
