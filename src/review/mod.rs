//! Spaced review of missed or struggled words
//!
//! [`classify`] maps a [`RoundOutcome`] to scheduling rules, and
//! [`ReviewScheduler`] turns those rules into persisted [`ReviewItem`]s.

mod outcome;
mod queue;
mod scheduler;

pub use outcome::{ErrorPattern, RoundOutcome, ScheduleRule, classify};
pub use queue::{ReviewItem, ReviewQueueState};
pub use scheduler::{
    Clock, DEFAULT_CAP, DEFAULT_SLOW_THRESHOLD_SECS, DEFAULT_STORAGE_KEY, ReviewConfig,
    ReviewScheduler, system_clock,
};
