//! TUI rendering with ratatui
//!
//! Layout: header, six-row letter grid beside a timer/message panel, the
//! input line, and a status bar.

use super::app::{App, MessageStyle};
use crate::core::LetterFeedback;
use crate::engine::{MAX_GUESSES, Snapshot, TIMED_GAME_SECS};
use crate::persist::SaveStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: SaveStore>(f: &mut Frame, app: &App<S>) {
    let snap = app.engine.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - grid on the left, timer and messages on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_grid(f, app, &snap, main_chunks[0]);

    let info_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(main_chunks[1]);

    render_timer(f, &snap, info_chunks[0]);
    render_messages(f, app, info_chunks[1]);

    render_input(f, app, &snap, chunks[2]);
    render_status(f, &snap, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE")
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

fn cell_style(feedback: LetterFeedback) -> Style {
    match feedback {
        LetterFeedback::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterFeedback::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterFeedback::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_grid<S: SaveStore>(f: &mut Frame, app: &App<S>, snap: &Snapshot, area: Rect) {
    let mut lines = vec![Line::from("")];

    for row in 0..MAX_GUESSES {
        let line = if let Some((guess, feedback)) = snap.rows.get(row) {
            let mut spans = Vec::with_capacity(10);
            for (i, ch) in guess.chars().enumerate() {
                spans.push(Span::styled(
                    format!(" {ch} "),
                    cell_style(feedback.letters()[i]),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        } else if row == snap.rows.len() && !snap.finished {
            // The row being typed
            let mut spans = Vec::with_capacity(10);
            for i in 0..5 {
                let cell = app
                    .input_buffer
                    .chars()
                    .nth(i)
                    .map_or_else(|| " _ ".to_string(), |ch| format!(" {ch} "));
                spans.push(Span::styled(cell, Style::default().fg(Color::Yellow)));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        } else {
            Line::from(Span::styled(
                " ·   ·   ·   ·   · ",
                Style::default().fg(Color::DarkGray),
            ))
        };

        lines.push(line);
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(grid, area);
}

fn render_timer(f: &mut Frame, snap: &Snapshot, area: Rect) {
    if snap.timed_mode {
        let ratio = f64::from(snap.remaining_secs) / f64::from(TIMED_GAME_SECS);
        let label = format!(
            "{:02}:{:02}{}",
            snap.remaining_secs / 60,
            snap.remaining_secs % 60,
            if snap.paused { " (paused)" } else { "" }
        );

        let color = if snap.remaining_secs <= 30 {
            Color::Red
        } else {
            Color::Cyan
        };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(" Time Left ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .gauge_style(Style::default().fg(color))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(label);

        f.render_widget(gauge, area);
    } else {
        let paragraph = Paragraph::new("No timer")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(" Time Left ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(paragraph, area);
    }
}

fn render_messages<S: SaveStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_input<S: SaveStore>(f: &mut Frame, app: &App<S>, snap: &Snapshot, area: Rect) {
    let (title, content, color) = if snap.finished {
        (
            " Game over | n: new  t: timed  x: clear save  s: share  q: quit ",
            "",
            if snap.won { Color::Green } else { Color::Red },
        )
    } else if snap.paused {
        (" Paused | Ctrl+P to resume ", "", Color::DarkGray)
    } else {
        (
            " Type a 5-letter guess | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        )
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, snap: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match (snap.timed_mode, snap.paused) {
        (true, true) => "Mode: Timed (paused)",
        (true, false) => "Mode: Timed",
        (false, _) => "Mode: Classic",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let tries = Paragraph::new(format!("Tries: {}/{MAX_GUESSES}", snap.rows.len()))
        .alignment(Alignment::Center);
    f.render_widget(tries, chunks[1]);

    let help_text = if snap.finished {
        "n: New | t: Timed | s: Share | q: Quit"
    } else {
        "Ctrl+N: New | Ctrl+T: Timed | Ctrl+P: Pause | Ctrl+S: Share | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
