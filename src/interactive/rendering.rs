//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, hint panel and status bar for a round.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{KeyboardState, LetterStatus};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::round::{Round, TargetSource};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Hints and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    let empty = KeyboardState::new();
    let keyboard = app.round.as_ref().map_or(&empty, Round::keyboard);
    render_keyboard(f, keyboard, chunks[2]);

    render_status(f, app, chunks[3]);
}

fn status_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn tile(letter: char, status: Option<LetterStatus>) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), status_style(status))
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match &app.source {
        Some(TargetSource::Review(_)) => "🔁 WORD QUEST - Review Round",
        _ => "🎯 WORD QUEST",
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(round) = app.round.as_ref() else {
        f.render_widget(Paragraph::new("No round in progress").block(block), area);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    for record in round.guesses() {
        let spans: Vec<Span> = record
            .letters()
            .map(|(letter, status)| tile(char::from(letter), Some(status)))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if !round.is_over() {
        let input: Vec<char> = round.current_input().chars().collect();
        let spans: Vec<Span> = (0..round.word_length())
            .map(|i| match input.get(i) {
                Some(&c) => Span::styled(
                    format!(" {} ", c.to_ascii_uppercase()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    for _ in (round.guesses().len() + 1)..round.max_guesses() {
        lines.push(Line::from(Span::styled(
            " · ".repeat(round.word_length()),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // Suggestions
            Constraint::Percentage(45), // Messages
        ])
        .split(area);

    render_suggestions(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.suggestions {
        Some(suggestions) if !suggestions.is_empty() => {
            let mut lines = vec![Line::from(format!(
                "{} words fit{}",
                suggestions.total_matches,
                if suggestions.relaxed { " (relaxed)" } else { "" }
            ))];
            for candidate in &suggestions.words {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<12}", candidate.word.text().to_uppercase()),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" {:>3}", candidate.score),
                        Style::default().fg(Color::Cyan),
                    ),
                ]));
            }
            lines
        }
        Some(_) => vec![Line::from("No words fit the clues")],
        None => vec![Line::from("Press TAB for suggestions")],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Hints ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardState, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| tile(char::from(letter), keyboard.status(letter)))
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let round_text = format!("Round: {}", app.session.scheduler.round());
    f.render_widget(
        Paragraph::new(round_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let due = app.due_reviews();
    let due_style = if due > 0 {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(format!("Reviews due: {due}"))
            .alignment(Alignment::Center)
            .style(due_style),
        chunks[2],
    );

    let help_text = match app.input_mode {
        InputMode::RoundOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Enter: Submit | TAB: Hint",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
