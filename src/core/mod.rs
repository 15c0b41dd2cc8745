//! Core domain types for Word Quest
//!
//! Words, per-guess feedback, and the cumulative keyboard state. Everything
//! here is pure and deterministic.

mod error;
mod feedback;
mod keyboard;
mod word;

pub use error::EngineError;
pub use feedback::{Feedback, GuessRecord, LetterStatus, evaluate};
pub use keyboard::KeyboardState;
pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, Word, WordError};
