//! Play session shared by the line-based and TUI front ends
//!
//! Bundles the word pool, suggester, review scheduler, shuffle bag and
//! progress log, and runs the start-round / finish-round cycle against them.

use crate::config::Config;
use crate::core::Word;
use crate::review::{ReviewItem, ReviewScheduler};
use crate::round::{ProgressLog, Round, ShuffleBag, TargetSource, choose_target};
use crate::storage::{FileStore, MemoryStore, Store};
use crate::suggest::{Suggester, Suggestions};
use crate::wordlists::playable_words;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use tracing::{info, warn};

/// Storage backend chosen at start-up
pub type DynStore = Box<dyn Store + Send>;

/// Open a file store under `dir`, keeping state in memory when it is unavailable
#[must_use]
pub fn open_store(dir: &Path) -> DynStore {
    match FileStore::open(dir) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "data directory unavailable, keeping state in memory");
            Box::new(MemoryStore::new())
        }
    }
}

/// Backing stores for one session
pub struct SessionStores {
    pub review: DynStore,
    pub bag: DynStore,
    pub progress: DynStore,
}

impl SessionStores {
    /// Fresh in-memory stores
    #[must_use]
    pub fn memory() -> Self {
        Self {
            review: Box::new(MemoryStore::new()),
            bag: Box::new(MemoryStore::new()),
            progress: Box::new(MemoryStore::new()),
        }
    }

    /// File stores sharing `dir`, or in-memory stores when it cannot be opened
    #[must_use]
    pub fn open(dir: &Path) -> Self {
        match FileStore::open(dir) {
            Ok(store) => Self {
                review: Box::new(store.clone()),
                bag: Box::new(store.clone()),
                progress: Box::new(store),
            },
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "data directory unavailable, keeping state in memory");
                Self::memory()
            }
        }
    }
}

/// Long-lived state across rounds
pub struct Session {
    pub pool: Vec<Word>,
    pub suggester: Suggester,
    pub scheduler: ReviewScheduler<DynStore>,
    pub bag: ShuffleBag<DynStore>,
    pub progress: ProgressLog<DynStore>,
    pub rng: StdRng,
    pub max_guesses: usize,
    scope: String,
}

impl Session {
    /// Build a session over `words`, optionally restricted to one length
    ///
    pub fn new(
        config: &Config,
        words: &[Word],
        length: Option<usize>,
        stores: SessionStores,
        seed: Option<u64>,
    ) -> Self {
        let pool = playable_words(words, length);
        let scope = length.map_or_else(|| "all".to_string(), |len| format!("len{len}"));
        let rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

        Self {
            pool,
            suggester: Suggester::new(config.suggest),
            scheduler: ReviewScheduler::load(stores.review, config.review.clone()),
            bag: ShuffleBag::new(stores.bag),
            progress: ProgressLog::new(stores.progress),
            rng,
            max_guesses: config.max_guesses,
            scope,
        }
    }

    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Reviews currently due for this session's pool
    #[must_use]
    pub fn due_reviews(&self) -> usize {
        self.scheduler.count_due(&self.pool)
    }

    /// Start a new round, preferring a due review word
    pub fn start_round(&mut self) -> Option<(Round, TargetSource)> {
        let (target, source) = choose_target(
            &mut self.scheduler,
            &mut self.bag,
            &self.pool,
            &self.scope,
            &mut self.rng,
        )?;
        Some((Round::with_max_guesses(target, self.max_guesses), source))
    }

    /// Suggestions for the round so far, drawn from same-length pool words
    #[must_use]
    pub fn suggestions(&mut self, round: &Round) -> Option<Suggestions> {
        let length = round.word_length();
        let pool: Vec<Word> = self
            .pool
            .iter()
            .filter(|w| w.len() == length && !round.guesses().iter().any(|g| g.guess() == *w))
            .cloned()
            .collect();

        self.suggester
            .suggest(&pool, round.guesses(), length, &mut self.rng)
            .ok()
    }

    /// Hand a finished round to the scheduler and the progress log
    pub fn finish_round(&mut self, round: &Round) -> Vec<ReviewItem> {
        let outcome = round.outcome(round.elapsed());
        let scheduled = self.scheduler.schedule_review(round.target(), &outcome);
        self.progress
            .record(round.target(), outcome.won, outcome.guesses_used);
        info!(
            word = %round.target(),
            won = outcome.won,
            guesses = outcome.guesses_used,
            scheduled = scheduled.len(),
            "round finished"
        );
        scheduled
    }
}
