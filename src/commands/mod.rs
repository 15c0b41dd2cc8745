//! Command implementations

pub mod review;
pub mod session;
pub mod simple;
pub mod simulate;
pub mod solve;
pub mod suggest;

pub use review::{ReviewReport, review_report};
pub use session::{DynStore, Session, SessionStores, open_store};
pub use simple::{run_simple, run_simple_with};
pub use simulate::{SimulationConfig, SimulationStatistics, run_simulation};
pub use solve::{GuessStep, SolveConfig, SolveError, SolveResult, solve_word};
pub use suggest::{parse_history_entry, run_suggest};
