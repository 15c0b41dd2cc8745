//! Suggestion command
//!
//! Ranks pool words for a hand-entered history such as `crane=--Y-G`.

use crate::core::{Feedback, GuessRecord, Word};
use crate::suggest::{Suggester, Suggestions};
use crate::wordlists::playable_words;
use anyhow::{Context, Result, bail};
use rand::Rng;

/// Parse one `guess=feedback` history entry
///
/// # Errors
///
/// Returns an error if the entry has no `=`, the guess is not a valid word,
/// the feedback has unknown symbols, or the two lengths differ.
///
/// # Examples
/// ```
/// use wordquest_engine::commands::parse_history_entry;
///
/// let record = parse_history_entry("crane=--Y-G").unwrap();
/// assert_eq!(record.guess().text(), "crane");
/// assert_eq!(record.feedback().to_string(), "--Y-G");
/// ```
pub fn parse_history_entry(entry: &str) -> Result<GuessRecord> {
    let Some((guess, feedback)) = entry.split_once('=') else {
        bail!("expected GUESS=FEEDBACK, got '{entry}'");
    };

    let guess = Word::new(guess).with_context(|| format!("invalid guess in '{entry}'"))?;
    let Some(feedback) = Feedback::parse(feedback) else {
        bail!("invalid feedback in '{entry}': use G/Y/- or 🟩🟨⬜");
    };

    GuessRecord::new(guess, feedback).with_context(|| format!("length mismatch in '{entry}'"))
}

/// Suggest words for `entries`
///
/// The word length comes from `length`, else the first entry, else 5.
///
/// # Errors
///
/// Returns an error if an entry is malformed or entries disagree on length.
pub fn run_suggest<R: Rng + ?Sized>(
    entries: &[String],
    pool: &[Word],
    length: Option<usize>,
    suggester: &Suggester,
    rng: &mut R,
) -> Result<Suggestions> {
    let history = entries
        .iter()
        .map(|entry| parse_history_entry(entry))
        .collect::<Result<Vec<_>>>()?;

    let length = length
        .or_else(|| history.first().map(|r| r.guess().len()))
        .unwrap_or(5);

    let pool = playable_words(pool, Some(length));
    if pool.is_empty() {
        bail!("no {length}-letter words in the word list");
    }

    suggester
        .suggest(&pool, &history, length, rng)
        .context("history does not match the word length")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::wordlists::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parses_codes_and_emoji() {
        let record = parse_history_entry("plant=🟩🟨⬜⬜🟩").unwrap();
        assert_eq!(
            record.feedback().statuses(),
            &[
                LetterStatus::Correct,
                LetterStatus::Present,
                LetterStatus::Absent,
                LetterStatus::Absent,
                LetterStatus::Correct
            ]
        );
    }

    #[test]
    fn rejects_malformed_entries() {
        assert!(parse_history_entry("crane").is_err());
        assert!(parse_history_entry("cr4ne=-----").is_err());
        assert!(parse_history_entry("crane=--X--").is_err());
        assert!(parse_history_entry("crane=---").is_err());
    }

    #[test]
    fn suggestions_follow_history() {
        let pool = words_from_slice(&["plant", "giant", "crane", "slate", "ox"]);
        let mut rng = StdRng::seed_from_u64(2);

        // crane vs plant: a and n correct
        let entries = vec!["crane=--GG-".to_string()];
        let suggestions =
            run_suggest(&entries, &pool, None, &Suggester::default(), &mut rng).unwrap();

        let words: Vec<&str> = suggestions.words.iter().map(|c| c.word.text()).collect();
        assert!(words.contains(&"plant"));
        assert!(words.contains(&"giant"));
        assert!(!words.contains(&"ox"));
    }

    #[test]
    fn mixed_lengths_fail() {
        let pool = words_from_slice(&["plant", "ox"]);
        let mut rng = StdRng::seed_from_u64(2);
        let entries = vec!["crane=-----".to_string(), "ox=--".to_string()];

        assert!(run_suggest(&entries, &pool, None, &Suggester::default(), &mut rng).is_err());
    }

    #[test]
    fn length_without_words_fails() {
        let pool = words_from_slice(&["plant"]);
        let mut rng = StdRng::seed_from_u64(2);
        assert!(run_suggest(&[], &pool, Some(7), &Suggester::default(), &mut rng).is_err());
    }
}
