//! Persisted review queue state

use serde::{Deserialize, Serialize};

/// A word scheduled to come back in a later round
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub word: String,
    pub due_round: u64,
    pub reason: String,
    /// Epoch milliseconds
    pub created_at: u64,
}

impl ReviewItem {
    /// Due once the round counter reaches `due_round`
    #[must_use]
    pub const fn is_due(&self, round: u64) -> bool {
        self.due_round <= round
    }
}

/// Round counter plus queued items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewQueueState {
    pub round: u64,
    pub items: Vec<ReviewItem>,
}

impl ReviewQueueState {
    /// Drop invalid items, order by `(due_round, created_at)` and keep `cap`
    ///
    /// Truncation drops from the tail: furthest-due items go first, and among
    /// items due the same round the newest goes first.
    pub fn normalize(&mut self, cap: usize) {
        self.items
            .retain(|item| item.due_round > 0 && !item.word.trim().is_empty());
        self.items
            .sort_by(|a, b| (a.due_round, a.created_at).cmp(&(b.due_round, b.created_at)));
        self.items.truncate(cap);
    }
}
