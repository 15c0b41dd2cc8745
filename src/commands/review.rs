//! Review queue and recent progress report

use crate::core::Word;
use crate::review::{ReviewItem, ReviewScheduler};
use crate::round::{DayProgress, ProgressLog};
use crate::storage::Store;

/// Days of history shown in the report
pub const RECENT_DAYS: usize = 7;

/// Snapshot of the review queue against a pool
pub struct ReviewReport {
    pub round: u64,
    pub due: Vec<ReviewItem>,
    pub upcoming: Vec<ReviewItem>,
    /// Queued items whose word is not in the pool
    pub out_of_pool: usize,
    /// Newest first
    pub recent_days: Vec<(String, DayProgress)>,
}

/// Split the queue into due, upcoming and out-of-pool items, alongside the
/// last few days of play
#[must_use]
pub fn review_report<S: Store, P: Store>(
    scheduler: &ReviewScheduler<S>,
    progress: &ProgressLog<P>,
    pool: &[Word],
) -> ReviewReport {
    let round = scheduler.round();
    let mut due = Vec::new();
    let mut upcoming = Vec::new();
    let mut out_of_pool = 0;

    for item in scheduler.items() {
        if !pool.iter().any(|w| w.text() == item.word) {
            out_of_pool += 1;
        } else if item.is_due(round) {
            due.push(item.clone());
        } else {
            upcoming.push(item.clone());
        }
    }

    ReviewReport {
        round,
        due,
        upcoming,
        out_of_pool,
        recent_days: progress.recent(RECENT_DAYS),
    }
}
