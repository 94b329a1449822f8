//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{MAX_TRIES, Outcome};
use crate::output::formatters::{gallows, guessed_list};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input hint
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
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

    let Some(session) = &app.session else {
        let paragraph = Paragraph::new("No word loaded")
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut lines: Vec<Line> = gallows(session.wrong_guesses())
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();
    lines.push(Line::from(""));

    let pattern_style = match session.outcome() {
        Outcome::Won => Style::default().fg(Color::Green),
        Outcome::Lost => Style::default().fg(Color::Red),
        Outcome::InProgress => Style::default().fg(Color::Yellow),
    }
    .add_modifier(Modifier::BOLD);

    // Show the full word once the round is lost
    let shown = if session.outcome() == Outcome::Lost {
        spaced(session.secret().text())
    } else {
        session.pattern().spaced()
    };
    lines.push(Line::from(Span::styled(shown, pattern_style)));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tries gauge
            Constraint::Length(4), // Guessed letters
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_tries(f, app, chunks[0]);
    render_guessed(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_tries(f: &mut Frame, app: &App, area: Rect) {
    let tries = app.session.as_ref().map_or(0, |s| s.tries_remaining());
    let percent = u16::from(tries) * 100 / u16::from(MAX_TRIES);
    let color = match tries {
        0..=1 => Color::Red,
        2..=3 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Tries ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{tries}/{MAX_TRIES} tries left"));

    f.render_widget(gauge, area);
}

fn render_guessed(f: &mut Frame, app: &App, area: Rect) {
    let guessed = app
        .session
        .as_ref()
        .map(|s| guessed_list(&s.guessed_letters()))
        .unwrap_or_default();

    let paragraph = Paragraph::new(guessed)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Guessed ").borders(Borders::ALL));
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode() {
        InputMode::Guessing => (" Type a letter to guess ", Color::Yellow),
        InputMode::RoundOver => (" Round over | n: new game  q: quit ", Color::Green),
        InputMode::Unavailable => (" Cannot start a round | n: retry  q: quit ", Color::Red),
    };

    let input = Paragraph::new("")
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.rounds_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Esc: Quit | Ctrl+N: New Game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn spaced(text: &str) -> String {
    text.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
