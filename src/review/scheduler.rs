//! Review scheduler
//!
//! Turns round outcomes into future review items keyed to a monotonically
//! increasing round counter, and answers which items are due for a word pool.
//! Storage faults never escape: they are logged and the in-memory state stays
//! authoritative for the session.

use super::outcome::{RoundOutcome, classify};
use super::queue::{ReviewItem, ReviewQueueState};
use crate::core::Word;
use crate::storage::{Store, load_json, save_json};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

/// Epoch-millisecond clock
pub type Clock = fn() -> u64;

/// Wall-clock time in epoch milliseconds
#[must_use]
pub fn system_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

pub const DEFAULT_CAP: usize = 36;
pub const DEFAULT_SLOW_THRESHOLD_SECS: u64 = 90;
pub const DEFAULT_STORAGE_KEY: &str = "wq_v2_review_queue";

/// Scheduler tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Maximum number of queued items
    pub cap: usize,
    /// Rounds longer than this count as slow solves
    pub slow_threshold_secs: u64,
    pub storage_key: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            cap: DEFAULT_CAP,
            slow_threshold_secs: DEFAULT_SLOW_THRESHOLD_SECS,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl ReviewConfig {
    #[must_use]
    pub const fn slow_threshold(&self) -> Duration {
        Duration::from_secs(self.slow_threshold_secs)
    }
}

/// Spaced-review queue over a `Store`
#[derive(Debug)]
pub struct ReviewScheduler<S: Store> {
    state: ReviewQueueState,
    store: S,
    config: ReviewConfig,
    clock: Clock,
}

impl<S: Store> ReviewScheduler<S> {
    /// Load the persisted queue, starting empty when it is missing or unreadable
    pub fn load(store: S, config: ReviewConfig) -> Self {
        let mut state = match load_json::<ReviewQueueState>(&store, &config.storage_key) {
            Ok(Some(state)) => state,
            Ok(None) => ReviewQueueState::default(),
            Err(e) => {
                warn!(key = %config.storage_key, error = %e, "discarding unreadable review queue");
                ReviewQueueState::default()
            }
        };
        state.normalize(config.cap);

        debug!(round = state.round, items = state.items.len(), "review queue loaded");

        Self {
            state,
            store,
            config,
            clock: system_clock,
        }
    }

    /// Replace the clock used for `created_at`
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn round(&self) -> u64 {
        self.state.round
    }

    #[must_use]
    pub fn items(&self) -> &[ReviewItem] {
        &self.state.items
    }

    #[must_use]
    pub const fn state(&self) -> &ReviewQueueState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &ReviewConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Record a finished round for `word` and enqueue the reviews it earns
    ///
    /// Due rounds are relative to the round counter before this call. A
    /// candidate is dropped when the same word already has an item due within
    /// one round of it. The counter advances exactly once per call, whether
    /// or not anything was enqueued.
    ///
    /// Returns the items accepted for the queue. An item may later be evicted
    /// by the capacity limit in the same call.
    pub fn schedule_review(&mut self, word: &Word, outcome: &RoundOutcome) -> Vec<ReviewItem> {
        let base = self.state.round;
        let now = (self.clock)();
        let mut enqueued = Vec::new();

        for rule in classify(outcome, self.config.slow_threshold()) {
            for &delay in &rule.delays {
                let Some(due_round) = base.checked_add(delay) else {
                    warn!(word = %word, round = base, delay, "review due round out of range");
                    continue;
                };
                if self.has_nearby(word.text(), due_round) {
                    debug!(word = %word, due_round, reason = %rule.reason, "skipping near-duplicate review");
                    continue;
                }

                let item = ReviewItem {
                    word: word.text().to_string(),
                    due_round,
                    reason: rule.reason.clone(),
                    created_at: now,
                };
                self.state.items.push(item.clone());
                enqueued.push(item);
            }
        }

        self.advance_round();
        self.state.normalize(self.config.cap);
        self.persist();

        if !enqueued.is_empty() {
            info!(
                word = %word,
                round = self.state.round,
                scheduled = enqueued.len(),
                "scheduled reviews"
            );
        }

        enqueued
    }

    /// Number of due items whose word is in `pool`
    #[must_use]
    pub fn count_due(&self, pool: &[Word]) -> usize {
        let pool = pool_set(pool);
        self.due_in(&pool).count()
    }

    /// Earliest due item whose word is in `pool`
    #[must_use]
    pub fn peek_due(&self, pool: &[Word]) -> Option<ReviewItem> {
        let pool = pool_set(pool);
        self.due_in(&pool).next().cloned()
    }

    /// Remove `item` from the queue; removing an absent item is a no-op
    pub fn consume(&mut self, item: &ReviewItem) {
        let before = self.state.items.len();
        self.state.items.retain(|queued| queued != item);

        if self.state.items.len() < before {
            debug!(word = %item.word, due_round = item.due_round, "consumed review");
        }
        self.persist();
    }

    fn has_nearby(&self, word: &str, due_round: u64) -> bool {
        self.state
            .items
            .iter()
            .any(|item| item.word == word && item.due_round.abs_diff(due_round) <= 1)
    }

    fn due_in<'a>(&'a self, pool: &'a FxHashSet<&'a str>) -> impl Iterator<Item = &'a ReviewItem> + 'a {
        let round = self.state.round;
        self.state
            .items
            .iter()
            .filter(move |item| item.is_due(round) && pool.contains(item.word.as_str()))
    }

    fn advance_round(&mut self) {
        self.state.round = self.state.round.saturating_add(1);
    }

    fn persist(&mut self) {
        if let Err(e) = save_json(&mut self.store, &self.config.storage_key, &self.state) {
            warn!(key = %self.config.storage_key, error = %e, "failed to persist review queue");
        }
    }
}

fn pool_set(pool: &[Word]) -> FxHashSet<&str> {
    pool.iter().map(Word::text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::ErrorPattern;
    use crate::storage::MemoryStore;

    const QUICK: Duration = Duration::from_secs(10);

    fn fixed_clock() -> u64 {
        1_000
    }

    fn scheduler() -> ReviewScheduler<MemoryStore> {
        ReviewScheduler::load(MemoryStore::new(), ReviewConfig::default()).with_clock(fixed_clock)
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn dues(items: &[ReviewItem]) -> Vec<u64> {
        items.iter().map(|i| i.due_round).collect()
    }

    #[test]
    fn loss_schedules_three_reviews() {
        let mut scheduler = scheduler();
        let enqueued = scheduler.schedule_review(&word("plant"), &RoundOutcome::lost(6, QUICK));

        assert_eq!(dues(&enqueued), vec![1, 3, 7]);
        assert!(enqueued.iter().all(|i| i.reason == "lost" && i.created_at == 1_000));
        assert_eq!(scheduler.round(), 1);
    }

    #[test]
    fn plant_becomes_due_next_round() {
        let mut scheduler = scheduler();
        let pool = vec![word("plant"), word("crane")];

        scheduler.schedule_review(&word("plant"), &RoundOutcome::lost(6, QUICK));

        assert_eq!(scheduler.count_due(&pool), 1);
        let item = scheduler.peek_due(&pool).unwrap();
        assert_eq!(item.word, "plant");
        assert_eq!(item.due_round, 1);

        scheduler.consume(&item);
        assert_eq!(scheduler.count_due(&pool), 0);
        assert_eq!(dues(scheduler.items()), vec![3, 7]);
    }

    #[test]
    fn easy_win_only_advances_round() {
        let mut scheduler = scheduler();
        let enqueued = scheduler.schedule_review(&word("crane"), &RoundOutcome::won(2, 6, QUICK));

        assert!(enqueued.is_empty());
        assert!(scheduler.items().is_empty());
        assert_eq!(scheduler.round(), 1);
    }

    #[test]
    fn near_duplicates_are_rejected() {
        let mut scheduler = scheduler();
        // hard-solve [3, 6] then hint-used [4]: 4 sits next to 3
        let outcome = RoundOutcome::won(6, 6, QUICK).with_hint();
        let enqueued = scheduler.schedule_review(&word("alloy"), &outcome);

        assert_eq!(dues(&enqueued), vec![3, 6]);
        assert!(enqueued.iter().all(|i| i.reason == "hard-solve"));
    }

    #[test]
    fn dedupe_spans_calls_for_the_same_word_only() {
        let mut scheduler = scheduler();
        scheduler.schedule_review(&word("plant"), &RoundOutcome::lost(6, QUICK));

        // round is now 1, so a second loss proposes 2, 4, 8 against 1, 3, 7
        let again = scheduler.schedule_review(&word("plant"), &RoundOutcome::lost(6, QUICK));
        assert!(again.is_empty());

        let other = scheduler.schedule_review(&word("crane"), &RoundOutcome::lost(6, QUICK));
        assert_eq!(dues(&other), vec![3, 5, 9]);
    }

    #[test]
    fn pattern_delays_apply() {
        let mut scheduler = scheduler();
        let outcome = RoundOutcome::won(3, 6, QUICK).with_error_pattern(ErrorPattern::BlendPosition);
        let enqueued = scheduler.schedule_review(&word("blend"), &outcome);

        assert_eq!(dues(&enqueued), vec![2, 6]);
        assert_eq!(enqueued[0].reason, "pattern:blend-position");
    }

    #[test]
    fn capacity_evicts_furthest_due() {
        let config = ReviewConfig {
            cap: 4,
            ..ReviewConfig::default()
        };
        let mut scheduler =
            ReviewScheduler::load(MemoryStore::new(), config).with_clock(fixed_clock);

        scheduler.schedule_review(&word("plant"), &RoundOutcome::lost(6, QUICK));
        scheduler.schedule_review(&word("crane"), &RoundOutcome::lost(6, QUICK));

        // plant 1,3,7 and crane 2,4,8 -> keep the four soonest
        assert_eq!(dues(scheduler.items()), vec![1, 2, 3, 4]);

        let persisted: ReviewQueueState = load_json(scheduler.store(), DEFAULT_STORAGE_KEY)
            .unwrap()
            .unwrap();
        assert_eq!(persisted.items.len(), 4);
        assert_eq!(dues(&persisted.items), vec![1, 2, 3, 4]);
    }

    #[test]
    fn saturated_round_counter_does_not_overflow() {
        let mut store = MemoryStore::new();
        store
            .set(DEFAULT_STORAGE_KEY, r#"{"round":18446744073709551615,"items":[]}"#)
            .unwrap();
        let mut scheduler = ReviewScheduler::load(store, ReviewConfig::default());

        let enqueued = scheduler.schedule_review(&word("plant"), &RoundOutcome::lost(6, QUICK));
        assert!(enqueued.is_empty());
        assert_eq!(scheduler.round(), u64::MAX);

        // only the one-round delay still fits
        let mut store = MemoryStore::new();
        store
            .set(DEFAULT_STORAGE_KEY, r#"{"round":18446744073709551613,"items":[]}"#)
            .unwrap();
        let mut scheduler = ReviewScheduler::load(store, ReviewConfig::default());
        let enqueued = scheduler.schedule_review(&word("plant"), &RoundOutcome::lost(6, QUICK));
        assert_eq!(dues(&enqueued), vec![u64::MAX - 1]);
        assert_eq!(scheduler.round(), u64::MAX - 1);
    }

    #[test]
    fn due_items_filtered_by_pool() {
        let mut scheduler = scheduler();
        scheduler.schedule_review(&word("plant"), &RoundOutcome::lost(6, QUICK));

        assert_eq!(scheduler.count_due(&[word("crane")]), 0);
        assert!(scheduler.peek_due(&[word("crane")]).is_none());
    }

    #[test]
    fn due_count_grows_as_rounds_pass() {
        let mut scheduler = scheduler();
        let pool = vec![word("plant"), word("crane")];
        scheduler.schedule_review(&word("plant"), &RoundOutcome::lost(6, QUICK));

        let mut last = scheduler.count_due(&pool);
        for _ in 0..8 {
            scheduler.schedule_review(&word("crane"), &RoundOutcome::won(1, 6, QUICK));
            let now = scheduler.count_due(&pool);
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, 3);
    }

    #[test]
    fn consume_is_idempotent() {
        let mut scheduler = scheduler();
        scheduler.schedule_review(&word("plant"), &RoundOutcome::lost(6, QUICK));
        let item = scheduler.items()[0].clone();

        scheduler.consume(&item);
        scheduler.consume(&item);
        assert_eq!(scheduler.items().len(), 2);
    }

    #[test]
    fn state_survives_reload() {
        let mut scheduler = scheduler();
        scheduler.schedule_review(&word("plant"), &RoundOutcome::lost(6, QUICK));
        let state = scheduler.state().clone();

        let store = scheduler.store().clone();
        let reloaded = ReviewScheduler::load(store, ReviewConfig::default());
        assert_eq!(reloaded.state(), &state);
    }

    #[test]
    fn corrupt_blob_loads_empty() {
        let mut store = MemoryStore::new();
        store.set(DEFAULT_STORAGE_KEY, "{\"round\": \"three\"").unwrap();

        let scheduler = ReviewScheduler::load(store, ReviewConfig::default());
        assert_eq!(scheduler.round(), 0);
        assert!(scheduler.items().is_empty());
    }

    #[test]
    fn loaded_state_is_normalized() {
        let mut store = MemoryStore::new();
        store
            .set(
                DEFAULT_STORAGE_KEY,
                r#"{"round":2,"items":[
                    {"word":"crane","dueRound":5,"reason":"lost","createdAt":1},
                    {"word":"plant","dueRound":0,"reason":"lost","createdAt":1},
                    {"word":"alloy","dueRound":3,"reason":"lost","createdAt":1}
                ]}"#,
            )
            .unwrap();

        let scheduler = ReviewScheduler::load(store, ReviewConfig::default());
        let words: Vec<&str> = scheduler.items().iter().map(|i| i.word.as_str()).collect();
        assert_eq!(words, vec!["alloy", "crane"]);
        assert_eq!(scheduler.round(), 2);
    }

    #[test]
    fn write_failures_are_swallowed() {
        let mut store = MemoryStore::new();
        store.set_fail_writes(true);
        let mut scheduler = ReviewScheduler::load(store, ReviewConfig::default());

        let enqueued = scheduler.schedule_review(&word("plant"), &RoundOutcome::lost(6, QUICK));
        assert_eq!(enqueued.len(), 3);
        assert_eq!(scheduler.round(), 1);
        assert!(!scheduler.store().contains(DEFAULT_STORAGE_KEY));
    }
}
