//! TUI rendering with ratatui
//!
//! Index, game, and not-found screens for the puzzle game.

use super::app::{App, Screen};
use crate::core::{Feedback, Verdict};
use crate::session::Session;
use crate::store::CompletionStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Display cap for the guess grid; the session itself has no guess limit
const MAX_VISIBLE_ROWS: usize = 6;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<S: CompletionStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match app.screen {
        Screen::Index => render_index(f, app, chunks[1]),
        Screen::Game => render_game(f, app, chunks[1]),
        Screen::NotFound { id } => render_not_found(f, id, chunks[1]),
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 WORDLE PUZZLES")
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

fn render_index<S: CompletionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let items: Vec<ListItem> = app
        .catalog
        .iter()
        .enumerate()
        .map(|(i, puzzle)| {
            let tries = app.store.tries_for(puzzle.id());
            let badge = match tries {
                Some(1) => "Solved in 1 try".to_string(),
                Some(n) => format!("Solved in {n} tries"),
                None => "Unsolved".to_string(),
            };

            let badge_style = if tries.is_some() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let mut line = Line::from(vec![
                Span::styled(
                    format!(" Puzzle #{:<3}", puzzle.id()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{} letters  ", puzzle.word().len()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(badge, badge_style),
            ]);

            if i == app.selected {
                line = line.style(Style::default().bg(Color::Rgb(40, 40, 60)));
            }

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Puzzles ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_game<S: CompletionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let Some(session) = app.session.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Guess grid
            Constraint::Length(5), // Keyboard hints
        ])
        .split(area);

    render_grid(f, session, chunks[0]);
    render_keyboard(f, session, chunks[1]);
}

fn render_grid(f: &mut Frame, session: &Session, area: Rect) {
    let mut lines: Vec<Line> = vec![Line::default()];

    // Show the most recent guesses, leaving one row for the input line
    // while the puzzle is unsolved
    let visible = if session.is_completed() {
        MAX_VISIBLE_ROWS
    } else {
        MAX_VISIBLE_ROWS - 1
    };
    let skip = session.guesses().len().saturating_sub(visible);

    for (i, record) in session.guesses().iter().enumerate().skip(skip) {
        if let Some(feedback) = session.feedback_for(i) {
            lines.push(guess_line(record.text(), &feedback, record.just_added()));
            lines.push(Line::default());
        }
    }

    let shown = session.guesses().len() - skip;

    if !session.is_completed() {
        lines.push(input_line(session));
        lines.push(Line::default());
    }

    let filled = shown + usize::from(!session.is_completed());
    for _ in filled..MAX_VISIBLE_ROWS {
        lines.push(empty_line(session.word().len()));
        lines.push(Line::default());
    }

    let title = format!(" Puzzle #{} ", session.puzzle_id());
    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(grid, area);
}

fn guess_line(text: &str, feedback: &Feedback, just_added: bool) -> Line<'static> {
    let spans: Vec<Span> = text
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let mut style = feedback
                .verdicts()
                .get(i)
                .copied()
                .map_or_else(Style::default, verdict_style);
            if just_added {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Span::styled(format!(" {} ", ch.to_ascii_uppercase()), style)
        })
        .collect();

    Line::from(spans)
}

fn input_line(session: &Session) -> Line<'static> {
    let style = if session.shake() {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut spans: Vec<Span> = session
        .buffer()
        .chars()
        .map(|ch| Span::styled(format!(" {} ", ch.to_ascii_uppercase()), style))
        .collect();

    for _ in session.buffer().len()..session.word().len() {
        spans.push(Span::styled(
            " _ ",
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

fn empty_line(word_len: usize) -> Line<'static> {
    let spans: Vec<Span> = (0..word_len)
        .map(|_| Span::styled(" · ", Style::default().fg(Color::DarkGray)))
        .collect();
    Line::from(spans)
}

fn render_keyboard(f: &mut Frame, session: &Session, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|ch| {
                    let style = session
                        .letter_hint(ch)
                        .map_or_else(Style::default, verdict_style);
                    Span::styled(format!(" {} ", ch.to_ascii_uppercase()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_not_found(f: &mut Frame, id: usize, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "404",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!("No puzzle with id {id}")),
        Line::default(),
        Line::from(Span::styled(
            "Press Esc to go back to the index",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_status<S: CompletionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (text, solved) = match app.screen {
        Screen::Index => ("↑/↓ select · Enter play · q quit".to_string(), false),
        Screen::Game => match app.session.as_ref() {
            Some(s) if s.is_completed() => (
                format!("Solved in {} tries! · Esc back · Ctrl-C quit", s.guesses().len()),
                true,
            ),
            _ => ("Type letters · Enter submit · Backspace delete · Esc back".to_string(), false),
        },
        Screen::NotFound { .. } => ("Esc back · q quit".to_string(), false),
    };

    let style = if solved {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let status = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(status, area);
}

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        Verdict::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        Verdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}
