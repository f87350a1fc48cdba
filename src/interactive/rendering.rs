//! TUI rendering with ratatui
//!
//! Board, messages, and help overlay for the assistant interface.

use super::app::{App, MessageStyle};
use crate::core::LetterStatus;
use crate::game::{GameStatus, MAX_ROUNDS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.show_help {
        render_help_overlay(f);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 WORDLE ASSISTANT")
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
    let mut lines: Vec<Line> = vec![Line::from("")];

    if app.session.rounds().is_empty() {
        let text = if app.session.busy() {
            "⏳ Loading initial guess..."
        } else {
            "Press 'n' to start a game."
        };
        lines.push(Line::from(text).alignment(Alignment::Center));
    }

    let locked = app.session.locked_positions();
    let open_index = app.session.history().open_index();

    for (index, round) in app.session.rounds().iter().enumerate() {
        let is_open = open_index == Some(index);
        let mut spans: Vec<Span> = Vec::new();

        for (position, &byte) in round.guess().chars().iter().enumerate() {
            let mut style = cell_style(round.status_at(position));

            if is_open && position == app.cursor && !app.session.status().is_terminal() {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            if is_open && locked.contains(&position) {
                style = style.add_modifier(Modifier::DIM);
            }

            spans.push(Span::styled(
                format!("  {}  ", (byte as char).to_ascii_uppercase()),
                style,
            ));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    if app.show_idle_hint() {
        lines.push(
            Line::from("👆 Tap a letter (1-5 or ←/→ + Space) to set its color")
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center),
        );
    }

    match app.session.status() {
        GameStatus::Won => {
            lines.push(
                Line::from("Game Over, We Won! 🎉")
                    .style(
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )
                    .alignment(Alignment::Center),
            );
        }
        GameStatus::Lost => {
            lines.push(
                Line::from("Game Over, We Lost 😢")
                    .style(
                        Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::BOLD),
                    )
                    .alignment(Alignment::Center),
            );
        }
        GameStatus::InProgress => {}
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn cell_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterStatus::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent | LetterStatus::Unset => {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        }
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(5)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let round_text = match app.session.history().open_index() {
        Some(index) => format!("Round: {}/{MAX_ROUNDS}", index + 1),
        None => "Round: -".to_string(),
    };
    let round = Paragraph::new(round_text).alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let state_text = if app.session.busy() {
        "⏳ Waiting for solver..."
    } else {
        match app.session.status() {
            GameStatus::InProgress => "Your move",
            GameStatus::Won => "Won 🎉",
            GameStatus::Lost => "Lost 😢",
        }
    };
    let state = Paragraph::new(state_text).alignment(Alignment::Center);
    f.render_widget(state, chunks[1]);

    let help = Paragraph::new("q: Quit | n: New Game | Space: Cycle | Enter: Submit | ?: Help")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_help_overlay(f: &mut Frame) {
    let area = centered_rect(60, 50, f.area());

    let text = vec![
        Line::from(""),
        Line::from("1. Wait for the initial guess to load."),
        Line::from(""),
        Line::from("2. Tap the letters (1-5, or ←/→ and Space) to cycle their"),
        Line::from("   colors until the row matches your Wordle screen."),
        Line::from(""),
        Line::from("3. Press Enter to submit the status and get the next guess."),
        Line::from(""),
        Line::from("4. Repeat until you find the word or run out of guesses."),
        Line::from(""),
        Line::from("Press any key to close.").style(Style::default().fg(Color::DarkGray)),
    ];

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .title(" How to Use ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

/// Centered sub-rectangle taking the given percentages of the frame
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
