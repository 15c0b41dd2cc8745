//! Round collaborator: guess entry, target selection, round outcome and
//! play history

mod game;
mod picker;
mod progress;

pub use game::{DEFAULT_MAX_GUESSES, Round, RoundError, RoundStatus, SubmitResult};
pub use picker::{BAG_KEY_PREFIX, BagState, ShuffleBag, TargetSource, choose_target};
pub use progress::{
    DayProgress, PROGRESS_KEY, ProgressEntry, ProgressHistory, ProgressLog, RETENTION_DAYS, day_key,
};
