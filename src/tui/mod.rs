//! Terminal User Interface (TUI) for pomo.
//!
//! Renders the timer and relays key presses to it.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::PomoError;
use crate::pomodoro::{Runtime, Snapshot};
use crate::tui::event::Action;

/// Run the TUI application until the user quits.
///
/// Returns the timer state at the moment of quitting.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(runtime: Runtime) -> Result<Snapshot, PomoError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| PomoError::terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode().ok();
        return Err(PomoError::terminal(format!("Failed to setup terminal: {e}")));
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            disable_raw_mode().ok();
            execute!(io::stdout(), LeaveAlternateScreen).ok();
            return Err(PomoError::terminal(format!("Failed to create terminal: {e}")));
        }
    };

    let mut app = App::new(runtime);
    let result = run_app(&mut terminal, &mut app);
    app.quit();

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    tracing::info!("timer closed");
    result.map(|()| app.snapshot())
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), PomoError> {
    let mut dirty = true;

    while !app.should_quit {
        if dirty {
            terminal
                .draw(|frame| ui::render(frame, app))
                .map_err(|e| PomoError::terminal(format!("Failed to draw: {e}")))?;
            dirty = false;
        }

        // Input first, so a pause lands before any tick queued behind it.
        if let Some(action) = event::poll_action()? {
            match action {
                Action::Quit => app.quit(),
                Action::Help => app.show_help(),
                Action::Redraw => {}
                Action::Intent(intent) => app.dispatch(intent),
            }
            dirty = true;
        }

        dirty |= app.on_ticks();
    }

    Ok(())
}
