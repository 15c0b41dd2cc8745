//! Cumulative per-letter state across a round
//!
//! Folds each guess's feedback into the best status ever observed for a letter.
//! States only move forward: absent -> present -> correct.

use super::{GuessRecord, LetterStatus};
use rustc_hash::FxHashMap;

/// Best known status of every letter tested so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<u8, LetterStatus>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess into the state
    ///
    /// A letter already known correct is never downgraded, even when the new
    /// guess places it at a wrong position.
    pub fn record(&mut self, record: &GuessRecord) {
        for (letter, status) in record.letters() {
            self.letters
                .entry(letter)
                .and_modify(|best| *best = (*best).max(status))
                .or_insert(status);
        }
    }

    /// Build the state from a full guess history
    #[must_use]
    pub fn from_records(records: &[GuessRecord]) -> Self {
        let mut state = Self::new();
        for record in records {
            state.record(record);
        }
        state
    }

    /// Best status seen for `letter`, or `None` if untested
    #[must_use]
    pub fn status(&self, letter: u8) -> Option<LetterStatus> {
        self.letters.get(&letter).copied()
    }

    /// Read-only view of the letter map
    #[must_use]
    pub const fn as_map(&self) -> &FxHashMap<u8, LetterStatus> {
        &self.letters
    }

    /// Tested letters in alphabetical order
    #[must_use]
    pub fn entries(&self) -> Vec<(u8, LetterStatus)> {
        let mut entries: Vec<_> = self.letters.iter().map(|(&l, &s)| (l, s)).collect();
        entries.sort_unstable_by_key(|&(l, _)| l);
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}
