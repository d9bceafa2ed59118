//! Wires the controller to its tick scheduler and audible cue.
//!
//! After every intent the scheduler is brought in line with the running flag,
//! so the timer is armed exactly while the controller is running.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use tracing::{debug, info};

use crate::pomodoro::controller::{Controller, Intent, Snapshot, TickOutcome};
use crate::pomodoro::durations::DurationConfig;
use crate::pomodoro::notify::Notifier;
use crate::pomodoro::scheduler::{Tick, TickScheduler};

/// A controller driven by a live timer.
pub struct Runtime {
    controller: Controller,
    scheduler: TickScheduler,
    ticks: Receiver<Tick>,
    notifier: Box<dyn Notifier>,
}

impl Runtime {
    /// Create an idle runtime.
    #[must_use]
    pub fn new(durations: DurationConfig, period: Duration, notifier: Box<dyn Notifier>) -> Self {
        let (scheduler, ticks) = TickScheduler::new(period);
        Self {
            controller: Controller::new(durations),
            scheduler,
            ticks,
            notifier,
        }
    }

    /// The underlying controller.
    #[must_use]
    pub const fn controller(&self) -> &Controller {
        &self.controller
    }

    /// The underlying scheduler.
    #[must_use]
    pub const fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    /// Current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.controller.snapshot()
    }

    /// Apply a user intent and re-sync the timer.
    pub fn handle(&mut self, intent: Intent) {
        self.controller.apply(intent);
        self.scheduler.sync(self.controller.is_running());
    }

    /// Deliver one tick. Stale ticks from a cancelled timer are dropped.
    pub fn on_tick(&mut self, tick: Tick) -> TickOutcome {
        if !self.scheduler.accept(tick) {
            debug!(generation = tick.generation(), "stale tick dropped");
            return TickOutcome::Ignored;
        }

        let outcome = self.controller.tick();
        if let TickOutcome::PhaseChanged(phase) = outcome {
            info!(%phase, "phase changed");
            self.notifier.phase_changed(phase);
        }
        self.scheduler.sync(self.controller.is_running());
        outcome
    }

    /// Deliver every tick waiting on the channel.
    ///
    /// Returns `true` if any of them changed the state.
    pub fn pump(&mut self) -> bool {
        let pending: Vec<Tick> = self.ticks.try_iter().collect();
        let mut changed = false;
        for tick in pending {
            changed |= self.on_tick(tick) != TickOutcome::Ignored;
        }
        changed
    }

    /// Cancel the timer ahead of teardown.
    pub fn shutdown(&mut self) {
        self.scheduler.cancel();
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::pomodoro::notify::MockNotifier;
    use crate::pomodoro::session::{Phase, PhaseState};

    const SLOW: Duration = Duration::from_secs(3600);

    fn current_tick(runtime: &Runtime) -> Tick {
        Tick::new(runtime.scheduler().current().unwrap())
    }

    fn quiet() -> Box<dyn Notifier> {
        let mut mock = MockNotifier::new();
        mock.expect_phase_changed().times(0);
        Box::new(mock)
    }

    #[test]
    fn test_play_pause_arms_and_cancels_timer() {
        let mut runtime = Runtime::new(DurationConfig::default(), SLOW, quiet());
        assert!(!runtime.scheduler().is_armed());

        runtime.handle(Intent::PlayPause);
        assert!(runtime.scheduler().is_armed());

        runtime.handle(Intent::PlayPause);
        assert!(!runtime.scheduler().is_armed());

        runtime.handle(Intent::PlayPause);
        assert!(runtime.scheduler().is_armed());

        runtime.handle(Intent::Stop);
        assert!(!runtime.scheduler().is_armed());
        assert_eq!(runtime.snapshot().phase, PhaseState::Idle);
    }

    #[test]
    fn test_cue_fires_once_per_transition() {
        let mut mock = MockNotifier::new();
        mock.expect_phase_changed()
            .with(eq(Phase::OnBreak))
            .times(1)
            .return_const(());
        mock.expect_phase_changed()
            .with(eq(Phase::Focusing))
            .times(1)
            .return_const(());

        let durations = DurationConfig::new(5, 1).unwrap();
        let mut runtime = Runtime::new(durations, SLOW, Box::new(mock));
        runtime.handle(Intent::PlayPause);

        let tick = current_tick(&runtime);
        for _ in 0..300 {
            assert_eq!(runtime.on_tick(tick), TickOutcome::Counted);
        }
        assert_eq!(
            runtime.on_tick(tick),
            TickOutcome::PhaseChanged(Phase::OnBreak)
        );
        for _ in 0..60 {
            runtime.on_tick(tick);
        }
        assert_eq!(
            runtime.on_tick(tick),
            TickOutcome::PhaseChanged(Phase::Focusing)
        );
        // Running stays true across the transition, so the same timer keeps going.
        assert!(runtime.scheduler().accept(tick));
    }

    #[test]
    fn test_tick_from_cancelled_timer_is_dropped() {
        let mut runtime = Runtime::new(DurationConfig::default(), SLOW, quiet());
        runtime.handle(Intent::PlayPause);
        let stale = current_tick(&runtime);
        runtime.on_tick(stale);

        runtime.handle(Intent::PlayPause);
        assert_eq!(runtime.on_tick(stale), TickOutcome::Ignored);

        // Resuming arms a new timer; the old generation stays stale.
        runtime.handle(Intent::PlayPause);
        assert_eq!(runtime.on_tick(stale), TickOutcome::Ignored);
        assert_eq!(runtime.snapshot().remaining_seconds, Some(1499));

        let fresh = current_tick(&runtime);
        assert_eq!(runtime.on_tick(fresh), TickOutcome::Counted);
        assert_eq!(runtime.snapshot().remaining_seconds, Some(1498));
    }

    #[test]
    fn test_tick_after_stop_is_dropped() {
        let mut runtime = Runtime::new(DurationConfig::default(), SLOW, quiet());
        runtime.handle(Intent::PlayPause);
        let stale = current_tick(&runtime);

        runtime.handle(Intent::Stop);
        assert_eq!(runtime.on_tick(stale), TickOutcome::Ignored);
        assert_eq!(runtime.snapshot().remaining_seconds, None);
    }

    #[test]
    fn test_pump_delivers_real_ticks() {
        let mut runtime = Runtime::new(
            DurationConfig::default(),
            Duration::from_millis(5),
            quiet(),
        );
        runtime.handle(Intent::PlayPause);

        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while runtime.snapshot().remaining_seconds == Some(1500) {
            assert!(std::time::Instant::now() < deadline, "no tick arrived");
            std::thread::sleep(Duration::from_millis(5));
            runtime.pump();
        }

        runtime.handle(Intent::PlayPause);
        let paused_at = runtime.snapshot().remaining_seconds;
        std::thread::sleep(Duration::from_millis(50));
        assert!(!runtime.pump());
        assert_eq!(runtime.snapshot().remaining_seconds, paused_at);
    }

    #[test]
    fn test_adjust_does_not_arm_timer() {
        let mut runtime = Runtime::new(DurationConfig::default(), SLOW, quiet());
        runtime.handle(Intent::IncreaseFocus);
        runtime.handle(Intent::DecreaseBreak);
        assert!(!runtime.scheduler().is_armed());
        let snap = runtime.snapshot();
        assert_eq!(snap.focus_minutes, 30);
        assert_eq!(snap.break_minutes, 4);
    }
}
