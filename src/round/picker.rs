//! Target word selection
//!
//! Due review items take priority; otherwise words are drawn from a persisted
//! per-scope shuffle bag so every pool word comes up once before any repeats.

use crate::core::Word;
use crate::review::{ReviewItem, ReviewScheduler};
use crate::storage::{Store, load_json, save_json};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const BAG_KEY_PREFIX: &str = "wq_v2_shuffle_bag";

/// Persisted bag contents for one scope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BagState {
    /// Remaining draws; the next word is popped from the end
    pub queue: Vec<String>,
    /// Most recently drawn word
    pub last: String,
}

/// Shuffle-bag word picker over a `Store`
#[derive(Debug)]
pub struct ShuffleBag<S: Store> {
    store: S,
}

impl<S: Store> ShuffleBag<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Storage key for `scope`
    #[must_use]
    pub fn key(scope: &str) -> String {
        format!("{BAG_KEY_PREFIX}:{scope}")
    }

    /// Draw the next word for `scope` from `pool`
    ///
    /// Queued words that left the pool are dropped. An empty bag is refilled
    /// by shuffling the pool, and the refill never starts with the word drawn
    /// last when the pool has more than one word.
    pub fn draw<R: Rng + ?Sized>(&mut self, pool: &[Word], scope: &str, rng: &mut R) -> Option<Word> {
        if pool.is_empty() {
            return None;
        }

        let key = Self::key(scope);
        let state = self.read(&key);
        let members: FxHashSet<&str> = pool.iter().map(Word::text).collect();

        let mut queue: Vec<String> = state
            .queue
            .into_iter()
            .filter(|w| members.contains(w.as_str()))
            .collect();

        if queue.is_empty() {
            queue = pool.iter().map(|w| w.text().to_string()).collect();
            queue.shuffle(rng);
            if queue.len() > 1 && queue.last() == Some(&state.last) {
                let end = queue.len() - 1;
                queue.swap(0, end);
            }
            debug!(scope, size = queue.len(), "refilled shuffle bag");
        }

        let next = queue.pop()?;
        self.write(
            &key,
            &BagState {
                queue,
                last: next.clone(),
            },
        );

        pool.iter().find(|w| w.text() == next).cloned()
    }

    fn read(&self, key: &str) -> BagState {
        match load_json::<BagState>(&self.store, key) {
            Ok(state) => state.unwrap_or_default(),
            Err(e) => {
                warn!(key, error = %e, "discarding unreadable shuffle bag");
                BagState::default()
            }
        }
    }

    fn write(&mut self, key: &str, state: &BagState) {
        if let Err(e) = save_json(&mut self.store, key, state) {
            warn!(key, error = %e, "failed to persist shuffle bag");
        }
    }
}

/// Where a chosen target came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSource {
    Review(ReviewItem),
    Bag,
}

/// Pick the next round's target
///
/// A due review item for `pool` is consumed and its word used; otherwise the
/// word is drawn from `bag`. Returns `None` only for an empty pool.
pub fn choose_target<A, B, R>(
    scheduler: &mut ReviewScheduler<A>,
    bag: &mut ShuffleBag<B>,
    pool: &[Word],
    scope: &str,
    rng: &mut R,
) -> Option<(Word, TargetSource)>
where
    A: Store,
    B: Store,
    R: Rng + ?Sized,
{
    if let Some(item) = scheduler.peek_due(pool)
        && let Ok(word) = Word::new(&item.word)
    {
        scheduler.consume(&item);
        debug!(word = %word, reason = %item.reason, "serving due review");
        return Some((word, TargetSource::Review(item)));
    }

    bag.draw(pool, scope, rng).map(|word| (word, TargetSource::Bag))
}
