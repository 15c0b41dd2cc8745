//! Simple interactive CLI mode
//!
//! Line-based rounds on stdin/stdout without the TUI.

use super::session::Session;
use crate::output::formatters::{colored_record, keyboard_line};
use crate::review::ErrorPattern;
use crate::round::{Round, RoundError, RoundStatus, TargetSource};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the player asked for at the prompt
enum Command {
    Quit,
    Hint,
    Flag(ErrorPattern),
    Guess(String),
}

fn parse_command(input: &str) -> Command {
    let lower = input.trim().to_lowercase();
    match lower.as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "hint" | "?" => Command::Hint,
        _ => lower
            .strip_prefix("flag ")
            .and_then(ErrorPattern::from_tag)
            .map_or(Command::Guess(lower.clone()), Command::Flag),
    }
}

/// Run the simple CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the simple CLI mode against arbitrary reader and writer
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n{}", "Word Quest".bright_cyan().bold())?;
    writeln!(out, "Type a guess and press Enter.")?;
    writeln!(out, "Commands: 'hint' for suggestions, 'flag <pattern>' to tag a tricky pattern, 'quit' to exit\n")?;

    loop {
        let Some((mut round, source)) = session.start_round() else {
            writeln!(out, "No words to play.")?;
            return Ok(());
        };

        if let TargetSource::Review(item) = &source {
            writeln!(out, "{}", format!("Review round ({})", item.reason).yellow())?;
        }
        writeln!(
            out,
            "{} letters, {} guesses. Reviews due: {}",
            round.word_length(),
            round.max_guesses(),
            session.due_reviews()
        )?;

        if !play_round(session, &mut round, input, out)? {
            return Ok(());
        }

        let scheduled = session.finish_round(&round);
        if !scheduled.is_empty() {
            let dues: Vec<String> = scheduled.iter().map(|i| i.due_round.to_string()).collect();
            writeln!(
                out,
                "{} will come back in rounds {}",
                round.target().text().to_uppercase(),
                dues.join(", ")
            )?;
        }

        match prompt(input, out, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {}
            _ => {
                writeln!(out, "\nThanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

/// Play until the round ends; returns `false` if the player quit
fn play_round<R: BufRead, W: Write>(
    session: &mut Session,
    round: &mut Round,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    loop {
        let label = format!("Guess {}/{}", round.guesses().len() + 1, round.max_guesses());
        let Some(line) = prompt(input, out, &label)? else {
            return Ok(false);
        };

        match parse_command(&line) {
            Command::Quit => {
                writeln!(out, "The word was {}", round.target().text().to_uppercase())?;
                return Ok(false);
            }
            Command::Hint => {
                round.use_hint();
                match session.suggestions(round) {
                    Some(suggestions) if !suggestions.is_empty() => {
                        let words: Vec<String> = suggestions
                            .words
                            .iter()
                            .map(|c| c.word.text().to_uppercase())
                            .collect();
                        writeln!(
                            out,
                            "Try: {} ({} matching)",
                            words.join(" "),
                            suggestions.total_matches
                        )?;
                    }
                    _ => writeln!(out, "No suggestions available")?,
                }
            }
            Command::Flag(pattern) => {
                round.flag_error_pattern(pattern);
                writeln!(out, "Tagged this round as {pattern}")?;
            }
            Command::Guess(guess) => match round.submit_word(&guess) {
                Ok(result) => {
                    writeln!(out, "  {}", colored_record(&result.record))?;
                    writeln!(out, "  {}", keyboard_line(round.keyboard()))?;
                    match result.status {
                        RoundStatus::Won => {
                            writeln!(
                                out,
                                "{}",
                                format!("Solved in {}!", result.guesses_used).green().bold()
                            )?;
                            return Ok(true);
                        }
                        RoundStatus::Lost => {
                            writeln!(
                                out,
                                "{} The word was {}",
                                "Out of guesses.".red(),
                                round.target().text().to_uppercase()
                            )?;
                            return Ok(true);
                        }
                        RoundStatus::InProgress => {}
                    }
                }
                Err(RoundError::TooShort { expected, .. }) => {
                    writeln!(out, "Need exactly {expected} letters")?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush().context("failed to flush output")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
