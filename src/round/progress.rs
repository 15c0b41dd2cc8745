//! Per-day play history
//!
//! Every finished round is appended to the day it ended on (UTC), with
//! running win and round tallies. Only the most recent days are kept.

use crate::core::Word;
use crate::review::{Clock, system_clock};
use crate::storage::{Store, load_json, save_json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub const PROGRESS_KEY: &str = "wq_v2_progress";
pub const RETENTION_DAYS: usize = 90;

/// One finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub word: String,
    pub won: bool,
    pub guesses: usize,
    /// Epoch milliseconds
    pub ts: u64,
}

/// Rounds played on one day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayProgress {
    pub words: Vec<ProgressEntry>,
    pub wins: usize,
    pub total: usize,
}

/// Days keyed `YYYY-MM-DD`, oldest first
pub type ProgressHistory = BTreeMap<String, DayProgress>;

/// `YYYY-MM-DD` (UTC) for an epoch-millisecond timestamp
#[must_use]
pub fn day_key(ts: u64) -> String {
    let millis = i64::try_from(ts).unwrap_or(i64::MAX);
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or_default()
        .date_naive()
        .to_string()
}

/// Persisted round history over a `Store`
#[derive(Debug)]
pub struct ProgressLog<S: Store> {
    store: S,
    clock: Clock,
}

impl<S: Store> ProgressLog<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            clock: system_clock,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Stored history; unreadable data reads as empty
    #[must_use]
    pub fn history(&self) -> ProgressHistory {
        match load_json::<ProgressHistory>(&self.store, PROGRESS_KEY) {
            Ok(history) => history.unwrap_or_default(),
            Err(e) => {
                warn!(key = PROGRESS_KEY, error = %e, "discarding unreadable progress");
                ProgressHistory::new()
            }
        }
    }

    /// Append a finished round to today's tally and return the updated history
    pub fn record(&mut self, word: &Word, won: bool, guesses: usize) -> ProgressHistory {
        let ts = (self.clock)();
        let mut history = self.history();

        let day = history.entry(day_key(ts)).or_default();
        day.words.push(ProgressEntry {
            word: word.text().to_string(),
            won,
            guesses,
            ts,
        });
        day.total += 1;
        if won {
            day.wins += 1;
        }

        while history.len() > RETENTION_DAYS {
            if let Some((dropped, _)) = history.pop_first() {
                debug!(day = %dropped, "progress day expired");
            }
        }

        if let Err(e) = save_json(&mut self.store, PROGRESS_KEY, &history) {
            warn!(key = PROGRESS_KEY, error = %e, "failed to persist progress");
        }
        history
    }

    /// Up to `days` most recent days, newest first
    #[must_use]
    pub fn recent(&self, days: usize) -> Vec<(String, DayProgress)> {
        self.history().into_iter().rev().take(days).collect()
    }
}
