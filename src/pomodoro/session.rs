//! Session phases and the active session value.

use serde::{Deserialize, Serialize};

use crate::pomodoro::durations::DurationConfig;

/// Which half of the cycle a session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Working interval
    Focusing,
    /// Rest interval
    OnBreak,
}

impl Phase {
    /// The phase that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Focusing => Self::OnBreak,
            Self::OnBreak => Self::Focusing,
        }
    }

    /// Configured length of this phase in minutes.
    #[must_use]
    pub const fn minutes(self, durations: &DurationConfig) -> u32 {
        match self {
            Self::Focusing => durations.focus_minutes(),
            Self::OnBreak => durations.break_minutes(),
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Focusing => "Focusing",
            Self::OnBreak => "On Break",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Phase as seen by renderers, including the idle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseState {
    /// No active session
    Idle,
    /// Working interval
    Focusing,
    /// Rest interval
    OnBreak,
}

impl From<Option<Phase>> for PhaseState {
    fn from(phase: Option<Phase>) -> Self {
        match phase {
            None => Self::Idle,
            Some(Phase::Focusing) => Self::Focusing,
            Some(Phase::OnBreak) => Self::OnBreak,
        }
    }
}

impl std::fmt::Display for PhaseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Focusing => write!(f, "{}", Phase::Focusing),
            Self::OnBreak => write!(f, "{}", Phase::OnBreak),
        }
    }
}

/// An active session: the current phase and the seconds left in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    phase: Phase,
    remaining_seconds: u32,
}

impl Session {
    /// Begin `phase` with its full configured length.
    #[must_use]
    pub const fn begin(phase: Phase, durations: &DurationConfig) -> Self {
        Self {
            phase,
            remaining_seconds: phase.minutes(durations) * 60,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left in the current phase.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Whether the current phase has run out.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Count down one second, stopping at zero.
    pub fn count_down(&mut self) {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
    }

    /// The session that replaces this one once it runs out.
    #[must_use]
    pub const fn advance(&self, durations: &DurationConfig) -> Self {
        Self::begin(self.phase.next(), durations)
    }
}
