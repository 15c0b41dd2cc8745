//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words from a file, one per line
///
/// Blank lines, `#` comments, invalid entries and duplicates are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordquest_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path.as_ref())?;

    let lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));
    let words = dedup_valid(lines);

    debug!(path = %path.as_ref().display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordquest_engine::wordlists::loader::words_from_slice;
/// use wordquest_engine::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    dedup_valid(slice.iter().copied())
}

/// Words of the requested length, or every word when `length` is `None`
#[must_use]
pub fn playable_words(words: &[Word], length: Option<usize>) -> Vec<Word> {
    words
        .iter()
        .filter(|w| length.is_none_or(|len| w.len() == len))
        .cloned()
        .collect()
}

fn dedup_valid<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    entries
        .filter_map(|s| Word::new(s).ok())
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "a", "thirteenchars", "sh0rt", "Slate", "crane"];
        let words = words_from_slice(input);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_file_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# pool\nplant\n\n  crane  \nbad1\nplant").unwrap();

        let words = load_from_file(file.path()).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["plant", "crane"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn playable_words_filters_by_length() {
        let words = words_from_slice(&["ox", "plant", "crane", "rabbit"]);

        assert_eq!(playable_words(&words, Some(5)).len(), 2);
        assert_eq!(playable_words(&words, Some(2))[0].text(), "ox");
        assert!(playable_words(&words, Some(9)).is_empty());
        assert_eq!(playable_words(&words, None).len(), 4);
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
