//! Word representation
//!
//! A Word stores a lowercase ASCII word of 2-12 letters along with helpers for
//! the letter counting that duplicate-aware evaluation relies on.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Shortest playable word length
pub const MIN_WORD_LEN: usize = 2;

/// Longest playable word length
pub const MAX_WORD_LEN: usize = 12;

/// A playable word
///
/// Stored lowercase; equality, ordering and hashing follow the text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be {MIN_WORD_LEN}-{MAX_WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    /// - Length is outside 2-12
    ///
    /// # Examples
    /// ```
    /// use wordquest_engine::core::Word;
    ///
    /// let word = Word::new("Plant").unwrap();
    /// assert_eq!(word.text(), "plant");
    ///
    /// assert!(Word::new("a").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as letter bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; words have at least two letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }

    /// Number of occurrences of `letter`
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters().iter().filter(|&&b| b == letter).count()
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &ch in self.letters() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
