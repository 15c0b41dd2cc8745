//! Word solving command
//!
//! Plays a round against a known target, always guessing the top suggestion,
//! and returns the solution path.

use crate::core::{EngineError, GuessRecord, Word};
use crate::suggest::Suggester;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub record: GuessRecord,
    /// Consistent candidates when the guess was chosen
    pub candidates_before: usize,
    pub score: i32,
    /// Candidates came from the relaxed filter
    pub relaxed: bool,
}

/// Errors raised by `solve_word`
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("invalid target word: {0}")]
    InvalidTarget(#[from] crate::core::WordError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Solve a specific word by repeatedly playing the best suggestion
///
/// Words already guessed are withheld from the pool. The run stops early
/// when no suggestion remains.
///
/// # Errors
///
/// Returns an error if the target word is invalid.
pub fn solve_word<R: Rng + ?Sized>(
    config: &SolveConfig,
    pool: &[Word],
    suggester: &Suggester,
    rng: &mut R,
) -> Result<SolveResult, SolveError> {
    let target = Word::new(&config.target)?;
    let candidates: Vec<Word> = pool
        .iter()
        .filter(|w| w.len() == target.len())
        .cloned()
        .collect();

    let mut history: Vec<GuessRecord> = Vec::new();
    let mut guessed: FxHashSet<Word> = FxHashSet::default();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let remaining: Vec<Word> = candidates
            .iter()
            .filter(|w| !guessed.contains(*w))
            .cloned()
            .collect();

        let suggestions = suggester.suggest(&remaining, &history, target.len(), rng)?;
        let Some(best) = suggestions.words.first() else {
            break;
        };

        let record = GuessRecord::evaluate(&best.word, &target)?;
        let solved = record.is_solved();

        guessed.insert(best.word.clone());
        history.push(record.clone());
        guesses.push(GuessStep {
            record,
            candidates_before: suggestions.total_matches,
            score: best.score,
            relaxed: suggestions.relaxed,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target.clone(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::SuggestConfig;
    use crate::wordlists::builtin_words;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn solve(target: &str, max_guesses: usize, seed: u64) -> SolveResult {
        let pool = builtin_words();
        let suggester = Suggester::new(SuggestConfig::default());
        let mut rng = StdRng::seed_from_u64(seed);
        let mut config = SolveConfig::new(target.to_string());
        config.max_guesses = max_guesses;
        solve_word(&config, &pool, &suggester, &mut rng).unwrap()
    }

    #[test]
    fn solve_records_history() {
        let result = solve("plant", 6, 1);

        assert!(!result.guesses.is_empty());
        let mut seen = FxHashSet::default();
        for step in &result.guesses {
            assert!(seen.insert(step.record.guess().clone()), "repeated guess");
            assert_eq!(step.record.guess().len(), 5);
        }
    }

    #[test]
    fn success_ends_on_solved_guess() {
        let result = solve("crane", 12, 3);

        assert!(result.success);
        let last = result.guesses.last().unwrap();
        assert_eq!(last.record.guess().text(), "crane");
        assert!(last.record.is_solved());
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let pool = builtin_words();
        let suggester = Suggester::default();
        let mut rng = StdRng::seed_from_u64(0);

        let result = solve_word(
            &SolveConfig::new("zz9zz".to_string()),
            &pool,
            &suggester,
            &mut rng,
        );
        assert!(matches!(result, Err(SolveError::InvalidTarget(_))));
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let result = solve("plant", 2, 5);
        assert!(result.guesses.len() <= 2);
    }

    #[test]
    fn target_outside_pool_still_terminates() {
        let pool = crate::wordlists::words_from_slice(&["crane", "slate"]);
        let suggester = Suggester::default();
        let mut rng = StdRng::seed_from_u64(9);

        let result = solve_word(
            &SolveConfig::new("plant".to_string()),
            &pool,
            &suggester,
            &mut rng,
        )
        .unwrap();

        assert!(!result.success);
        assert!(result.guesses.len() <= 2);
    }
}
