//! Word pool
//!
//! Provides the embedded word list compiled into the binary, plus loaders for
//! custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{load_from_file, playable_words, words_from_slice};

use crate::core::Word;

/// The embedded pool as `Word`s
#[must_use]
pub fn builtin_words() -> Vec<Word> {
    words_from_slice(WORDS)
}
