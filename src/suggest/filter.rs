//! Candidate filtering against a constraint model

use super::ConstraintModel;
use crate::core::Word;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Options controlling which constraints a candidate must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Reject candidates exceeding an inferred upper letter count.
    ///
    /// Upper bounds are the least reliable signal early in a round, so the
    /// fallback policy turns this off when strict filtering leaves too little.
    pub enforce_max_counts: bool,
}

impl FilterOptions {
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            enforce_max_counts: true,
        }
    }

    #[must_use]
    pub const fn relaxed() -> Self {
        Self {
            enforce_max_counts: false,
        }
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::strict()
    }
}

impl ConstraintModel {
    /// Is `word` consistent with every constraint selected by `options`?
    #[must_use]
    pub fn admits(&self, word: &Word, options: FilterOptions) -> bool {
        if word.len() != self.length {
            return false;
        }

        let positions_ok = word.letters().iter().enumerate().all(|(i, letter)| {
            !self.excluded_by_position[i].contains(letter)
                && self.fixed_letters[i].is_none_or(|fixed| fixed == *letter)
        });
        if !positions_ok {
            return false;
        }

        if word.letters().iter().any(|l| self.absent_letters.contains(l)) {
            return false;
        }

        let counts = word.letter_counts();
        let count = |letter: u8| counts.get(&letter).copied().unwrap_or(0);

        if self.min_counts.iter().any(|(&l, &min)| count(l) < min) {
            return false;
        }

        !(options.enforce_max_counts && self.max_counts.iter().any(|(&l, &max)| count(l) > max))
    }
}

/// Keep the pool words consistent with `model`, preserving pool order
#[must_use]
pub fn filter_candidates(pool: &[Word], model: &ConstraintModel, options: FilterOptions) -> Vec<Word> {
    pool.iter()
        .filter(|word| model.admits(word, options))
        .cloned()
        .collect()
}

/// Filtered candidates and whether the relaxed fallback produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
    pub words: Vec<Word>,
    pub relaxed: bool,
}

/// Filter strictly, falling back to relaxed mode below `min_results`
///
/// # Examples
/// ```
/// use wordquest_engine::core::Word;
/// use wordquest_engine::suggest::{ConstraintModel, filter_with_fallback};
///
/// let pool: Vec<Word> = ["plant", "slant", "crane"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let result = filter_with_fallback(&pool, &ConstraintModel::empty(5), 3);
/// assert_eq!(result.words.len(), 3);
/// assert!(!result.relaxed);
/// ```
#[must_use]
pub fn filter_with_fallback(pool: &[Word], model: &ConstraintModel, min_results: usize) -> FilterResult {
    let strict = filter_candidates(pool, model, FilterOptions::strict());
    if strict.len() >= min_results {
        return FilterResult {
            words: strict,
            relaxed: false,
        };
    }

    let relaxed = filter_candidates(pool, model, FilterOptions::relaxed());
    debug!(
        strict = strict.len(),
        relaxed = relaxed.len(),
        min_results,
        "strict filtering below threshold, relaxing max counts"
    );

    FilterResult {
        words: relaxed,
        relaxed: true,
    }
}
