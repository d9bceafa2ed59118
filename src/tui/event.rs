//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomoError;
use crate::pomodoro::Intent;

/// How long to wait for input before checking the tick channel again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Show the key help.
    Help,
    /// Redraw without changing anything (e.g. after a resize).
    Redraw,
    /// Relay an intent to the timer.
    Intent(Intent),
}

/// Poll for a terminal event.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_action() -> Result<Option<Action>, PomoError> {
    let ready = event::poll(POLL_INTERVAL)
        .map_err(|e| PomoError::terminal(format!("Event poll failed: {e}")))?;
    if !ready {
        return Ok(None);
    }

    match event::read().map_err(|e| PomoError::terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(map_key(key)),
        Event::Resize(..) => Ok(Some(Action::Redraw)),
        _ => Ok(None),
    }
}

/// Translate a key press into an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::Help,

        // Timer controls
        KeyCode::Char(' ' | 'p') | KeyCode::Enter => Action::Intent(Intent::PlayPause),
        KeyCode::Char('s') => Action::Intent(Intent::Stop),

        // Durations
        KeyCode::Up | KeyCode::Char('f') => Action::Intent(Intent::IncreaseFocus),
        KeyCode::Down | KeyCode::Char('F') => Action::Intent(Intent::DecreaseFocus),
        KeyCode::Right | KeyCode::Char('b') => Action::Intent(Intent::IncreaseBreak),
        KeyCode::Left | KeyCode::Char('B') => Action::Intent(Intent::DecreaseBreak),

        _ => return None,
    };

    Some(action)
}
