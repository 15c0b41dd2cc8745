//! TUI application state and logic

use crate::commands::Session;
use crate::review::ReviewItem;
use crate::round::{Round, RoundError, RoundStatus, TargetSource};
use crate::suggest::Suggestions;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: Session,
    pub round: Option<Round>,
    pub source: Option<TargetSource>,
    pub suggestions: Option<Suggestions>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub last_scheduled: Vec<ReviewItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index is the number of guesses used
    pub guess_distribution: Vec<usize>,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let stats = Statistics {
            guess_distribution: vec![0; session.max_guesses + 1],
            ..Statistics::default()
        };

        Self {
            session,
            round: None,
            source: None,
            suggestions: None,
            messages: vec![Message {
                text: "Type a word and press Enter. TAB shows suggestions.".to_string(),
                style: MessageStyle::Info,
            }],
            stats,
            should_quit: false,
            input_mode: InputMode::Guessing,
            last_scheduled: Vec::new(),
        }
    }

    pub fn new_game(&mut self) {
        self.suggestions = None;
        self.last_scheduled.clear();

        if let Some((round, source)) = self.session.start_round() {
            if let TargetSource::Review(item) = &source {
                self.add_message(
                    &format!("Review round: this word was {} before", item.reason),
                    MessageStyle::Info,
                );
            } else {
                self.add_message(
                    &format!("New {}-letter round started!", round.word_length()),
                    MessageStyle::Info,
                );
            }
            self.round = Some(round);
            self.source = Some(source);
            self.input_mode = InputMode::Guessing;
        } else {
            self.round = None;
            self.source = None;
            self.add_message("No words to play!", MessageStyle::Error);
        }
    }

    #[must_use]
    pub fn due_reviews(&self) -> usize {
        self.session.due_reviews()
    }

    pub fn show_hint(&mut self) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if round.is_over() {
            return;
        }

        round.use_hint();
        let suggestions = self.session.suggestions(round);
        match &suggestions {
            Some(s) if !s.is_empty() => {
                let matches = s.total_matches;
                self.add_message(&format!("{matches} words still fit"), MessageStyle::Info);
            }
            _ => self.add_message("No suggestions available", MessageStyle::Error),
        }
        self.suggestions = suggestions;
    }

    pub fn submit_guess(&mut self) {
        let Some(round) = self.round.as_mut() else {
            return;
        };

        match round.submit() {
            Ok(result) => {
                // Stale once the history changes
                self.suggestions = None;
                match result.status {
                    RoundStatus::Won => {
                        let celebration = match result.guesses_used {
                            1 => "HOLE IN ONE! Extraordinary!",
                            2 => "MAGNIFICENT! Two guesses!",
                            3 => "SPLENDID! Three guesses!",
                            4 => "GREAT JOB! Four guesses!",
                            5 => "NICE WORK! Five guesses!",
                            _ => "PHEW! Got it!",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.finish_round();
                    }
                    RoundStatus::Lost => {
                        let text = format!(
                            "Out of guesses. The word was {}",
                            round.target().text().to_uppercase()
                        );
                        self.add_message(&text, MessageStyle::Error);
                        self.finish_round();
                    }
                    RoundStatus::InProgress => {}
                }
            }
            Err(RoundError::TooShort { expected, .. }) => {
                self.add_message(&format!("Need {expected} letters"), MessageStyle::Error);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_round(&mut self) {
        let Some(round) = self.round.as_ref() else {
            return;
        };

        let won = round.status() == RoundStatus::Won;
        let used = round.guesses().len();
        self.last_scheduled = self.session.finish_round(round);

        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            if let Some(slot) = self.stats.guess_distribution.get_mut(used) {
                *slot += 1;
            }
        }

        if !self.last_scheduled.is_empty() {
            let text = format!(
                "Scheduled {} review(s) for this word",
                self.last_scheduled.len()
            );
            self.add_message(&text, MessageStyle::Info);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        self.input_mode = InputMode::RoundOver;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab | KeyCode::Char('?') => self.show_hint(),
                KeyCode::Enter => self.submit_guess(),
                KeyCode::Backspace => {
                    if let Some(round) = self.round.as_mut() {
                        round.pop_letter();
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(round) = self.round.as_mut() {
                        round.push_letter(c);
                    }
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
