//! Application state for the TUI.

use crate::pomodoro::{Intent, Runtime, Snapshot};

/// Key help shown in the status bar.
pub const HELP: &str =
    "space:play/pause | s:stop | ↑/↓:focus ±5 | →/←:break ±1 | ?:help | q:quit";

/// Application state.
pub struct App {
    /// The timer being displayed.
    runtime: Runtime,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app around an idle runtime.
    #[must_use]
    pub fn new(runtime: Runtime) -> Self {
        Self {
            runtime,
            status: Some("Press space to start, ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Current timer state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.runtime.snapshot()
    }

    /// Whether the duration controls are enabled.
    #[must_use]
    pub const fn can_adjust(&self) -> bool {
        self.runtime.controller().can_adjust()
    }

    /// Whether the stop control is enabled.
    #[must_use]
    pub const fn can_stop(&self) -> bool {
        self.runtime.controller().can_stop()
    }

    /// Relay a user intent to the timer.
    pub fn dispatch(&mut self, intent: Intent) {
        let rejected = match intent {
            Intent::IncreaseFocus
            | Intent::DecreaseFocus
            | Intent::IncreaseBreak
            | Intent::DecreaseBreak => !self.can_adjust(),
            Intent::Stop => !self.can_stop(),
            Intent::PlayPause => false,
        };

        self.runtime.handle(intent);

        self.status = if rejected {
            Some(match intent {
                Intent::Stop => "No session to stop".to_string(),
                _ => "Stop the session to change durations".to_string(),
            })
        } else {
            None
        };
    }

    /// Deliver pending ticks. Returns `true` if the display needs a redraw.
    pub fn on_ticks(&mut self) -> bool {
        self.runtime.pump()
    }

    /// Show the key help.
    pub fn show_help(&mut self) {
        self.status = Some(HELP.to_string());
    }

    /// Request exit and release the timer.
    pub fn quit(&mut self) {
        self.runtime.shutdown();
        self.should_quit = true;
    }
}
