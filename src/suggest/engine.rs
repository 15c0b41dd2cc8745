//! Suggestion engine interface

use super::{
    ConstraintModel, ScoreWeights, SuggestionCandidate, filter_with_fallback, rank_scored,
};
use crate::core::{EngineError, GuessRecord, Word};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tuning for suggestion requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Fall back to relaxed filtering when strict mode keeps fewer words
    pub min_strict_results: usize,
    /// Maximum number of suggestions returned
    pub limit: usize,
    pub weights: ScoreWeights,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            min_strict_results: 3,
            limit: 8,
            weights: ScoreWeights::default(),
        }
    }
}

/// Ranked suggestions for one request
#[derive(Debug, Clone)]
pub struct Suggestions {
    pub words: Vec<SuggestionCandidate>,
    /// Consistent candidates before truncation to the limit
    pub total_matches: usize,
    /// The relaxed fallback produced the candidates
    pub relaxed: bool,
    pub model: ConstraintModel,
}

impl Suggestions {
    #[must_use]
    pub fn best(&self) -> Option<&Word> {
        self.words.first().map(|c| &c.word)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Turns a guess history and a word pool into ranked suggestions
///
/// Stateless between calls: the constraint model is rebuilt from the full
/// history on every request.
#[derive(Debug, Clone, Default)]
pub struct Suggester {
    config: SuggestConfig,
}

impl Suggester {
    #[must_use]
    pub const fn new(config: SuggestConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// Suggest words from `pool` consistent with `history`
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if a record is not `length` letters.
    pub fn suggest<R: Rng + ?Sized>(
        &self,
        pool: &[Word],
        history: &[GuessRecord],
        length: usize,
        rng: &mut R,
    ) -> Result<Suggestions, EngineError> {
        let model = ConstraintModel::from_records(length, history)?;
        Ok(self.suggest_with_model(pool, model, rng))
    }

    /// Suggest words from `pool` for an already built model
    pub fn suggest_with_model<R: Rng + ?Sized>(
        &self,
        pool: &[Word],
        model: ConstraintModel,
        rng: &mut R,
    ) -> Suggestions {
        let filtered = filter_with_fallback(pool, &model, self.config.min_strict_results);
        let total_matches = filtered.words.len();

        let mut words = rank_scored(&filtered.words, &model, &self.config.weights, rng);
        words.truncate(self.config.limit);

        debug!(
            pool = pool.len(),
            guesses = model.guess_count,
            matches = total_matches,
            relaxed = filtered.relaxed,
            "computed suggestions"
        );

        Suggestions {
            words,
            total_matches,
            relaxed: filtered.relaxed,
            model,
        }
    }

    /// Count pool words consistent with `history`, using the same fallback as `suggest`
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if a record is not `length` letters.
    pub fn count_candidates(
        &self,
        pool: &[Word],
        history: &[GuessRecord],
        length: usize,
    ) -> Result<usize, EngineError> {
        let model = ConstraintModel::from_records(length, history)?;
        Ok(filter_with_fallback(pool, &model, self.config.min_strict_results)
            .words
            .len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn record(guess: &str, target: &str) -> GuessRecord {
        GuessRecord::evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).unwrap()
    }

    fn setup_pool() -> Vec<Word> {
        words(&[
            "plant", "slant", "giant", "chant", "crane", "bland", "grant", "ghost", "alloy",
            "loyal",
        ])
    }

    #[test]
    fn empty_history_ranks_whole_pool() {
        let suggester = Suggester::new(SuggestConfig {
            limit: 100,
            ..SuggestConfig::default()
        });
        let pool = setup_pool();
        let mut rng = StdRng::seed_from_u64(5);

        let suggestions = suggester.suggest(&pool, &[], 5, &mut rng).unwrap();
        assert_eq!(suggestions.total_matches, pool.len());
        assert_eq!(suggestions.words.len(), pool.len());
        assert!(!suggestions.relaxed);
    }

    #[test]
    fn suggestions_respect_history() {
        let suggester = Suggester::default();
        let pool = setup_pool();
        let history = vec![record("crane", "plant"), record("ghost", "plant")];
        let mut rng = StdRng::seed_from_u64(9);

        let suggestions = suggester.suggest(&pool, &history, 5, &mut rng).unwrap();
        let texts: Vec<&str> = suggestions.words.iter().map(|c| c.word.text()).collect();

        // C, R, E, G, H, O, S ruled out; A@2, N@3, T@4 fixed
        assert_eq!(texts, vec!["plant"]);
        // A single strict match is below the threshold of three
        assert!(suggestions.relaxed);
        assert_eq!(suggestions.model.guess_count, 2);
    }

    #[test]
    fn limit_truncates_but_total_counts_all() {
        let suggester = Suggester::new(SuggestConfig {
            limit: 2,
            ..SuggestConfig::default()
        });
        let pool = setup_pool();
        let mut rng = StdRng::seed_from_u64(0);

        let suggestions = suggester.suggest(&pool, &[], 5, &mut rng).unwrap();
        assert_eq!(suggestions.words.len(), 2);
        assert_eq!(suggestions.total_matches, pool.len());
        assert!(suggestions.best().is_some());
    }

    #[test]
    fn history_length_mismatch_is_error() {
        let suggester = Suggester::default();
        let pool = setup_pool();
        let history = vec![record("plan", "slot")];
        let mut rng = StdRng::seed_from_u64(0);

        assert!(suggester.suggest(&pool, &history, 5, &mut rng).is_err());
    }

    #[test]
    fn count_candidates_shrinks() {
        let suggester = Suggester::default();
        let pool = setup_pool();

        let before = suggester.count_candidates(&pool, &[], 5).unwrap();
        let after = suggester
            .count_candidates(&pool, &[record("crane", "plant")], 5)
            .unwrap();
        assert!(after < before);
    }
}
