//! Formatting utilities for terminal output

use crate::core::{GuessRecord, KeyboardState, LetterStatus};
use colored::{ColoredString, Colorize};

/// Keyboard rows in on-screen order
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Style one letter tile for its status
#[must_use]
pub fn colored_tile(letter: u8, status: Option<LetterStatus>) -> ColoredString {
    let tile = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match status {
        Some(LetterStatus::Correct) => tile.black().on_green().bold(),
        Some(LetterStatus::Present) => tile.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => tile.white().on_bright_black(),
        None => tile.normal(),
    }
}

/// Render a guess as coloured tiles followed by its emoji feedback
#[must_use]
pub fn colored_record(record: &GuessRecord) -> String {
    let tiles: String = record
        .letters()
        .map(|(letter, status)| colored_tile(letter, Some(status)).to_string())
        .collect();
    format!("{tiles}  {}", record.feedback().to_emoji())
}

/// Render the keyboard on one line, rows separated by `|`
#[must_use]
pub fn keyboard_line(keyboard: &KeyboardState) -> String {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.bytes()
                .map(|letter| match keyboard.status(letter) {
                    Some(LetterStatus::Correct) => plain_key(letter).green().bold().to_string(),
                    Some(LetterStatus::Present) => plain_key(letter).yellow().bold().to_string(),
                    Some(LetterStatus::Absent) => plain_key(letter).bright_black().to_string(),
                    None => plain_key(letter),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn plain_key(letter: u8) -> String {
    char::from(letter.to_ascii_uppercase()).to_string()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width] before the cast
    let filled = ((value / max) * width as f64).clamp(0.0, width as f64) as usize;

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
