//! Session controller: the Pomodoro state machine.
//!
//! The controller exclusively owns the duration store, the optional active
//! session, and the running flag. Renderers read a [`Snapshot`] and feed
//! [`Intent`]s back in; nothing else mutates the state.
//!
//! ```text
//!            start                 tick (remaining == 0)
//!   Idle ───────────▶ Focusing ◀──────────────────────▶ OnBreak
//!    ▲                    │                                │
//!    └────────── stop ────┴──────────── stop ──────────────┘
//! ```
//!
//! Every invalid intent is a silent no-op. The UI disables the matching
//! controls too, but the controller never relies on that.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pomodoro::durations::DurationConfig;
use crate::pomodoro::session::{Phase, PhaseState, Session};

/// A user request relayed from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Lengthen the focus interval
    IncreaseFocus,
    /// Shorten the focus interval
    DecreaseFocus,
    /// Lengthen the break interval
    IncreaseBreak,
    /// Shorten the break interval
    DecreaseBreak,
    /// Start a session when idle, otherwise pause or resume it
    PlayPause,
    /// Discard the active session
    Stop,
}

/// What a single tick did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Idle or paused; nothing changed.
    Ignored,
    /// One second was counted off the current phase.
    Counted,
    /// The current phase had run out and the given phase began.
    PhaseChanged(Phase),
}

/// Read-only view of the controller for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Configured focus interval in minutes
    pub focus_minutes: u32,
    /// Configured break interval in minutes
    pub break_minutes: u32,
    /// Current phase, or idle
    pub phase: PhaseState,
    /// Whether the timer is counting down
    pub running: bool,
    /// Seconds left in the current phase (None when idle)
    pub remaining_seconds: Option<u32>,
}

impl Snapshot {
    /// Whether a session exists (running or paused).
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.phase != PhaseState::Idle
    }

    /// Length of the current phase in minutes (None when idle).
    #[must_use]
    pub const fn phase_minutes(&self) -> Option<u32> {
        match self.phase {
            PhaseState::Idle => None,
            PhaseState::Focusing => Some(self.focus_minutes),
            PhaseState::OnBreak => Some(self.break_minutes),
        }
    }

    /// Fraction of the current phase that has elapsed, in `0.0..=1.0`.
    ///
    /// Always `0.0` when idle, whichever phase was last active.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let (Some(minutes), Some(remaining)) = (self.phase_minutes(), self.remaining_seconds)
        else {
            return 0.0;
        };
        let total = f64::from(minutes * 60);
        if total <= 0.0 {
            return 0.0;
        }
        (1.0 - f64::from(remaining) / total).clamp(0.0, 1.0)
    }

    /// Progress as a whole percentage, for labels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u16 {
        (self.progress() * 100.0).round() as u16
    }
}

/// The Pomodoro state machine.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    durations: DurationConfig,
    session: Option<Session>,
    running: bool,
}

impl Controller {
    /// Create an idle controller with the given durations.
    #[must_use]
    pub const fn new(durations: DurationConfig) -> Self {
        Self {
            durations,
            session: None,
            running: false,
        }
    }

    /// Current durations.
    #[must_use]
    pub const fn durations(&self) -> &DurationConfig {
        &self.durations
    }

    /// The active session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether the timer is counting down.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Whether no session exists.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    /// Durations may only be adjusted while idle.
    #[must_use]
    pub const fn can_adjust(&self) -> bool {
        self.is_idle()
    }

    /// Stop is only meaningful with an active session.
    #[must_use]
    pub const fn can_stop(&self) -> bool {
        !self.is_idle()
    }

    /// Apply a user intent.
    pub fn apply(&mut self, intent: Intent) {
        debug!(?intent, idle = self.is_idle(), running = self.running, "intent");
        match intent {
            Intent::IncreaseFocus => self.adjust(DurationConfig::increase_focus),
            Intent::DecreaseFocus => self.adjust(DurationConfig::decrease_focus),
            Intent::IncreaseBreak => self.adjust(DurationConfig::increase_break),
            Intent::DecreaseBreak => self.adjust(DurationConfig::decrease_break),
            Intent::PlayPause => self.play_pause(),
            Intent::Stop => self.stop(),
        }
    }

    fn adjust(&mut self, change: fn(&mut DurationConfig)) {
        if self.can_adjust() {
            change(&mut self.durations);
        }
    }

    /// Lengthen the focus interval (idle only).
    pub fn increase_focus(&mut self) {
        self.adjust(DurationConfig::increase_focus);
    }

    /// Shorten the focus interval (idle only).
    pub fn decrease_focus(&mut self) {
        self.adjust(DurationConfig::decrease_focus);
    }

    /// Lengthen the break interval (idle only).
    pub fn increase_break(&mut self) {
        self.adjust(DurationConfig::increase_break);
    }

    /// Shorten the break interval (idle only).
    pub fn decrease_break(&mut self) {
        self.adjust(DurationConfig::decrease_break);
    }

    /// The combined play/pause control.
    pub fn play_pause(&mut self) {
        if self.is_idle() {
            self.start();
        } else {
            self.toggle_running();
        }
    }

    /// Begin a focus phase. Only valid when idle.
    pub fn start(&mut self) {
        if self.is_idle() {
            self.session = Some(Session::begin(Phase::Focusing, &self.durations));
            self.running = true;
        }
    }

    /// Pause or resume the active session.
    ///
    /// When idle this does nothing and does not start a session; use
    /// [`Controller::play_pause`] or [`Controller::start`] for that.
    pub fn toggle_running(&mut self) {
        if !self.is_idle() {
            self.running = !self.running;
        }
    }

    /// Discard the active session. No-op when idle.
    pub fn stop(&mut self) {
        if self.session.take().is_some() {
            self.running = false;
        }
    }

    /// Advance the machine by one second.
    ///
    /// The zero check comes before the countdown, so a phase is shown at
    /// `00:00` for one full tick before the next phase begins.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Ignored;
        }
        let Some(session) = self.session.as_mut() else {
            return TickOutcome::Ignored;
        };

        if session.is_exhausted() {
            *session = session.advance(&self.durations);
            TickOutcome::PhaseChanged(session.phase())
        } else {
            session.count_down();
            TickOutcome::Counted
        }
    }

    /// Capture the state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            focus_minutes: self.durations.focus_minutes(),
            break_minutes: self.durations.break_minutes(),
            phase: self.session.map(|s| s.phase()).into(),
            running: self.running,
            remaining_seconds: self.session.map(|s| s.remaining_seconds()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(controller: &mut Controller, n: usize) -> TickOutcome {
        let mut last = TickOutcome::Ignored;
        for _ in 0..n {
            last = controller.tick();
        }
        last
    }

    #[test]
    fn test_new_is_idle() {
        let controller = Controller::default();
        let snap = controller.snapshot();
        assert_eq!(snap.phase, PhaseState::Idle);
        assert!(!snap.running);
        assert_eq!(snap.remaining_seconds, None);
        assert_eq!(snap.focus_minutes, 25);
        assert_eq!(snap.break_minutes, 5);
    }

    #[test]
    fn test_start_from_idle() {
        let mut controller = Controller::default();
        controller.start();

        let snap = controller.snapshot();
        assert_eq!(snap.phase, PhaseState::Focusing);
        assert!(snap.running);
        assert_eq!(snap.remaining_seconds, Some(1500));
    }

    #[test]
    fn test_start_is_noop_with_session() {
        let mut controller = Controller::default();
        controller.start();
        controller.tick();
        controller.toggle_running();
        controller.start();

        let snap = controller.snapshot();
        assert!(!snap.running);
        assert_eq!(snap.remaining_seconds, Some(1499));
    }

    #[test]
    fn test_play_pause_starts_then_toggles() {
        let mut controller = Controller::default();
        controller.apply(Intent::PlayPause);
        assert!(controller.is_running());
        assert_eq!(controller.snapshot().phase, PhaseState::Focusing);

        controller.apply(Intent::PlayPause);
        assert!(!controller.is_running());
        assert_eq!(controller.snapshot().phase, PhaseState::Focusing);

        controller.apply(Intent::PlayPause);
        assert!(controller.is_running());
    }

    #[test]
    fn test_toggle_running_is_noop_when_idle() {
        let mut controller = Controller::default();
        controller.toggle_running();
        assert!(controller.is_idle());
        assert!(!controller.is_running());
    }

    #[test]
    fn test_full_focus_phase_then_break() {
        let mut controller = Controller::default();
        controller.start();

        assert_eq!(ticks(&mut controller, 1500), TickOutcome::Counted);
        let snap = controller.snapshot();
        assert_eq!(snap.remaining_seconds, Some(0));
        assert_eq!(snap.phase, PhaseState::Focusing);

        assert_eq!(
            controller.tick(),
            TickOutcome::PhaseChanged(Phase::OnBreak)
        );
        let snap = controller.snapshot();
        assert_eq!(snap.phase, PhaseState::OnBreak);
        assert_eq!(snap.remaining_seconds, Some(300));
        assert!(snap.running);
    }

    #[test]
    fn test_break_returns_to_focus() {
        let mut controller = Controller::new(DurationConfig::new(5, 1).unwrap());
        controller.start();
        ticks(&mut controller, 301);
        assert_eq!(controller.snapshot().phase, PhaseState::OnBreak);

        ticks(&mut controller, 60);
        assert_eq!(controller.snapshot().remaining_seconds, Some(0));
        assert_eq!(
            controller.tick(),
            TickOutcome::PhaseChanged(Phase::Focusing)
        );
        assert_eq!(controller.snapshot().remaining_seconds, Some(300));
    }

    #[test]
    fn test_transition_uses_current_break_length() {
        let mut controller = Controller::default();
        controller.increase_break();
        controller.increase_break();
        controller.start();
        ticks(&mut controller, 1501);
        assert_eq!(controller.snapshot().remaining_seconds, Some(7 * 60));
    }

    #[test]
    fn test_tick_ignored_when_idle() {
        let mut controller = Controller::default();
        assert_eq!(controller.tick(), TickOutcome::Ignored);
        assert!(controller.is_idle());
    }

    #[test]
    fn test_paused_ticks_have_no_effect() {
        let mut controller = Controller::default();
        controller.start();
        ticks(&mut controller, 10);
        controller.toggle_running();

        assert_eq!(ticks(&mut controller, 100), TickOutcome::Ignored);
        assert_eq!(controller.snapshot().remaining_seconds, Some(1490));

        controller.toggle_running();
        controller.tick();
        assert_eq!(controller.snapshot().remaining_seconds, Some(1489));
    }

    #[test]
    fn test_stop_from_any_state() {
        let mut running = Controller::default();
        running.start();
        ticks(&mut running, 42);

        let mut paused = running.clone();
        paused.toggle_running();

        let mut on_break = Controller::default();
        on_break.start();
        ticks(&mut on_break, 1510);

        for mut controller in [running, paused, on_break] {
            controller.apply(Intent::Stop);
            let snap = controller.snapshot();
            assert_eq!(snap.phase, PhaseState::Idle);
            assert!(!snap.running);
            assert_eq!(snap.remaining_seconds, None);
        }
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let mut controller = Controller::default();
        controller.stop();
        assert!(controller.is_idle());
        assert!(!controller.can_stop());
    }

    #[test]
    fn test_adjustments_ignored_during_session() {
        let mut controller = Controller::default();
        controller.start();
        for intent in [
            Intent::IncreaseFocus,
            Intent::DecreaseFocus,
            Intent::IncreaseBreak,
            Intent::DecreaseBreak,
        ] {
            controller.apply(intent);
        }
        controller.toggle_running();
        controller.apply(Intent::IncreaseFocus);
        controller.apply(Intent::DecreaseBreak);

        let snap = controller.snapshot();
        assert_eq!(snap.focus_minutes, 25);
        assert_eq!(snap.break_minutes, 5);
        assert_eq!(snap.remaining_seconds, Some(1500));
    }

    #[test]
    fn test_adjustments_apply_after_stop() {
        let mut controller = Controller::default();
        controller.start();
        controller.stop();
        controller.apply(Intent::IncreaseFocus);
        assert_eq!(controller.snapshot().focus_minutes, 30);

        controller.start();
        assert_eq!(controller.snapshot().remaining_seconds, Some(1800));
    }

    #[test]
    fn test_progress_idle_is_zero() {
        let controller = Controller::default();
        assert!(controller.snapshot().progress().abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_during_phases() {
        let mut controller = Controller::new(DurationConfig::new(5, 1).unwrap());
        controller.start();
        assert!(controller.snapshot().progress().abs() < f64::EPSILON);

        ticks(&mut controller, 150);
        assert!((controller.snapshot().progress() - 0.5).abs() < 1e-9);

        ticks(&mut controller, 150);
        assert!((controller.snapshot().progress() - 1.0).abs() < 1e-9);
        assert_eq!(controller.snapshot().percent(), 100);

        // First tick of the break resets progress against the break length.
        controller.tick();
        assert!(controller.snapshot().progress().abs() < f64::EPSILON);
        ticks(&mut controller, 15);
        assert_eq!(controller.snapshot().percent(), 25);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut controller = Controller::default();
        controller.start();
        let json = serde_json::to_value(controller.snapshot()).unwrap();
        assert_eq!(json["phase"], "focusing");
        assert_eq!(json["remaining_seconds"], 1500);
        assert_eq!(json["running"], true);
    }
}
