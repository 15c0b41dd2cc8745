//! Self-play simulation across the word pool
//!
//! Runs the solve loop against every target in parallel and aggregates the
//! results. Each target gets its own rng seeded from the run seed and the
//! target's index, so a run is reproducible regardless of thread scheduling.

use super::solve::{SolveConfig, SolveResult, solve_word};
use crate::core::Word;
use crate::suggest::Suggester;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Result from simulating a single target
#[derive(Debug, Clone)]
pub struct TargetResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub success: bool,
}

/// Aggregate statistics of a simulation run
#[derive(Debug)]
pub struct SimulationStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    /// Failed targets and the solved targets that needed the most guesses
    pub hardest: Vec<(String, usize, bool)>,
}

/// Options for a simulation run
pub struct SimulationConfig {
    pub max_guesses: usize,
    pub limit: Option<usize>,
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_guesses: 6,
            limit: None,
            seed: 0,
            show_progress: true,
        }
    }
}

/// Simulate every target in `targets` (or the first `limit`) against `pool`
#[must_use]
pub fn run_simulation(
    suggester: &Suggester,
    pool: &[Word],
    targets: &[Word],
    config: &SimulationConfig,
) -> SimulationStatistics {
    let test_words: Vec<&Word> = targets
        .iter()
        .take(config.limit.unwrap_or(targets.len()))
        .collect();

    let pb = if config.show_progress {
        ProgressBar::new(test_words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        Ok(style) => pb.set_style(style.progress_chars("█▓▒░")),
        Err(e) => warn!(error = %e, "invalid progress template"),
    }

    let total_start = Instant::now();

    let results: Vec<TargetResult> = test_words
        .par_iter()
        .enumerate()
        .filter_map(|(idx, target)| {
            let mut rng = StdRng::seed_from_u64(config.seed ^ idx as u64);
            let solve_config = SolveConfig {
                target: target.text().to_string(),
                max_guesses: config.max_guesses,
            };
            let outcome = solve_word(&solve_config, pool, suggester, &mut rng);
            pb.inc(1);

            match outcome {
                Ok(result) => Some(to_target_result(result)),
                Err(e) => {
                    warn!(word = %target, error = %e, "simulation failed for target");
                    None
                }
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, total_start.elapsed())
}

fn to_target_result(result: SolveResult) -> TargetResult {
    TargetResult {
        word: result.target,
        guesses: result
            .guesses
            .iter()
            .map(|step| step.record.guess().text().to_string())
            .collect(),
        success: result.success,
    }
}

fn summarize(results: &[TargetResult], total_time: Duration) -> SimulationStatistics {
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in results.iter().filter(|r| r.success) {
        *guess_distribution.entry(result.guesses.len()).or_insert(0) += 1;
    }

    let solved = results.iter().filter(|r| r.success).count();
    let total_guesses: usize = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.guesses.len())
        .sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };
    let max_guesses = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.guesses.len())
        .max()
        .unwrap_or(0);

    let mut hardest: Vec<(String, usize, bool)> = results
        .iter()
        .map(|r| (r.word.clone(), r.guesses.len(), r.success))
        .collect();
    // Failures first, then most guesses, then alphabetical for stable output
    hardest.sort_by(|a, b| a.2.cmp(&b.2).then(b.1.cmp(&a.1)).then(a.0.cmp(&b.0)));
    hardest.truncate(10);

    SimulationStatistics {
        total_words: results.len(),
        solved,
        failed: results.len() - solved,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        hardest,
    }
}
