//! UI rendering for the TUI.
//!
//! Every widget here is a passive reader of [`Snapshot`]; none of them hold
//! state of their own.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::pomodoro::{minutes_to_duration, seconds_to_duration, PhaseState, Snapshot};
use crate::tui::app::{App, HELP};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let snapshot = app.snapshot();

    // Header, durations, controls, session, progress, spacer, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, &snapshot, chunks[0]);
    render_durations(frame, &snapshot, app.can_adjust(), chunks[1]);
    render_controls(frame, &snapshot, app.can_stop(), chunks[2]);
    if snapshot.has_session() {
        render_session(frame, &snapshot, chunks[3]);
        render_progress(frame, &snapshot, chunks[4]);
    }
    render_status_bar(frame, app, chunks[6]);
}

fn phase_color(phase: PhaseState) -> Color {
    match phase {
        PhaseState::Idle => Color::Cyan,
        PhaseState::Focusing => Color::Yellow,
        PhaseState::OnBreak => Color::Green,
    }
}

fn enabled_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let color = phase_color(snapshot.phase);
    let header = Paragraph::new(" pomo ")
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(header, area);
}

/// Render the focus and break duration adjusters.
fn render_durations(frame: &mut Frame<'_>, snapshot: &Snapshot, enabled: bool, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let style = enabled_style(enabled);
    let adjuster = |label: &str, minutes: u32, keys: &str| {
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{label}: {}", minutes_to_duration(minutes)), style),
            Span::styled(format!("  {keys}"), Style::default().fg(Color::DarkGray)),
        ]))
        .block(Block::default().borders(Borders::ALL).border_style(style))
    };

    frame.render_widget(
        adjuster("Focus Duration", snapshot.focus_minutes, "[↓ -] [↑ +]"),
        halves[0],
    );
    frame.render_widget(
        adjuster("Break Duration", snapshot.break_minutes, "[← -] [→ +]"),
        halves[1],
    );
}

/// Render the play/pause and stop controls.
fn render_controls(frame: &mut Frame<'_>, snapshot: &Snapshot, can_stop: bool, area: Rect) {
    let play = if snapshot.running {
        "⏸ pause"
    } else {
        "▶ play"
    };

    let line = Line::from(vec![
        Span::styled(
            format!("[{play}]"),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("[■ stop]", enabled_style(can_stop)),
    ]);

    let controls =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Timer controls "));

    frame.render_widget(controls, area);
}

/// Render the session title, remaining time and pause marker.
fn render_session(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let (Some(minutes), Some(remaining)) = (snapshot.phase_minutes(), snapshot.remaining_seconds)
    else {
        return;
    };

    let color = phase_color(snapshot.phase);
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} for {} minutes", snapshot.phase, minutes_to_duration(minutes)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{} remaining", seconds_to_duration(remaining))),
    ];
    if !snapshot.running {
        lines.push(Line::from(Span::styled(
            "PAUSED",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let session = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(session, area);
}

/// Render the elapsed-time gauge.
fn render_progress(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(phase_color(snapshot.phase)))
        .ratio(snapshot.progress())
        .label(format!("{}%", snapshot.percent()));

    frame.render_widget(gauge, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);
    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
