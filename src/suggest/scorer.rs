//! Heuristic candidate ranking
//!
//! Additive scoring: reward letters that line up with known structure, and
//! reward distinct letters that have never been tested. Ties are broken by a
//! shuffle drawn from the injected random source before a stable sort.

use super::ConstraintModel;
use crate::core::Word;
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Weights of the additive score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Letter equals the confirmed letter at this position
    pub fixed_position: i32,
    /// Known-positive letter at an unfixed position it is not excluded from
    pub positive_position: i32,
    /// Per distinct letter never typed this round
    pub untested_letter: i32,
    /// Per distinct letter already known to occur
    pub confirmed_letter: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            fixed_position: 4,
            positive_position: 2,
            untested_letter: 3,
            confirmed_letter: 1,
        }
    }
}

/// A pool word paired with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionCandidate {
    pub word: Word,
    pub score: i32,
}

/// Score `word` against `model`
///
/// Only meaningful for ranking; there is no normalisation.
#[must_use]
pub fn score(word: &Word, model: &ConstraintModel, weights: &ScoreWeights) -> i32 {
    let mut total = 0;

    for (i, &letter) in word.letters().iter().enumerate() {
        match model.fixed_letters.get(i).copied().flatten() {
            Some(fixed) if fixed == letter => total += weights.fixed_position,
            Some(_) => {}
            None => {
                let excluded = model
                    .excluded_by_position
                    .get(i)
                    .is_some_and(|set| set.contains(&letter));
                if model.is_positive(letter) && !excluded {
                    total += weights.positive_position;
                }
            }
        }
    }

    let distinct: FxHashSet<u8> = word.letters().iter().copied().collect();
    for letter in distinct {
        if !model.is_tested(letter) {
            total += weights.untested_letter;
        }
        if model.is_positive(letter) {
            total += weights.confirmed_letter;
        }
    }

    total
}

/// Score and order `words`, best first
///
/// The shuffle before the stable sort makes equal-score order depend on `rng`;
/// pass a seeded generator for reproducible output.
pub fn rank_scored<R: Rng + ?Sized>(
    words: &[Word],
    model: &ConstraintModel,
    weights: &ScoreWeights,
    rng: &mut R,
) -> Vec<SuggestionCandidate> {
    let mut shuffled = words.to_vec();
    shuffled.shuffle(rng);

    let mut scored: Vec<SuggestionCandidate> = shuffled
        .into_iter()
        .map(|word| {
            let score = score(&word, model, weights);
            SuggestionCandidate { word, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Order `words` by descending score
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordquest_engine::core::Word;
/// use wordquest_engine::suggest::{ConstraintModel, ScoreWeights, rank_candidates};
///
/// let words: Vec<Word> = ["eerie", "crane"].iter().map(|w| Word::new(w).unwrap()).collect();
/// let mut rng = StdRng::seed_from_u64(7);
/// let ranked = rank_candidates(&words, &ConstraintModel::empty(5), &ScoreWeights::default(), &mut rng);
///
/// // Five untested letters beat three
/// assert_eq!(ranked[0].text(), "crane");
/// ```
pub fn rank_candidates<R: Rng + ?Sized>(
    words: &[Word],
    model: &ConstraintModel,
    weights: &ScoreWeights,
    rng: &mut R,
) -> Vec<Word> {
    rank_scored(words, model, weights, rng)
        .into_iter()
        .map(|candidate| candidate.word)
        .collect()
}
