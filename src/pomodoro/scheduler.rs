//! Tick scheduler.
//!
//! At most one timer is armed at a time. An armed timer is a worker thread that
//! sends a [`Tick`] every period until it is told to shut down. Ticks carry the
//! generation of the timer that produced them; cancelling or re-arming bumps the
//! generation, so a tick that was already queued when the timer was cancelled is
//! rejected by [`TickScheduler::accept`] instead of reaching the controller.
//!
//! The worker never sees controller state. Whoever receives a tick reads the
//! current state at that moment.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

/// Default tick period in milliseconds.
pub const DEFAULT_PERIOD_MS: u64 = 1000;

/// One firing of an armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    generation: u64,
}

impl Tick {
    #[cfg(test)]
    pub(crate) const fn new(generation: u64) -> Self {
        Self { generation }
    }

    /// Generation of the timer that produced this tick.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to the armed worker. Dropping it disconnects the shutdown channel,
/// which also stops the worker.
#[derive(Debug)]
struct ArmedTimer {
    shutdown: Sender<()>,
}

impl ArmedTimer {
    fn spawn(generation: u64, period: Duration, ticks: Sender<Tick>) -> Self {
        let (shutdown, shutdown_rx) = mpsc::channel::<()>();

        thread::spawn(move || loop {
            match shutdown_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {
                    trace!(generation, "tick");
                    if ticks.send(Tick { generation }).is_err() {
                        // Receiver gone: the scheduler was torn down.
                        break;
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        Self { shutdown }
    }

    fn cancel(self) {
        // The worker may already have exited; either way it is gone.
        let _ = self.shutdown.send(());
    }
}

/// Owns the single repeating timer that drives the controller.
#[derive(Debug)]
pub struct TickScheduler {
    period: Duration,
    generation: u64,
    armed: Option<ArmedTimer>,
    ticks: Sender<Tick>,
}

impl TickScheduler {
    /// Create a disarmed scheduler and the receiver its ticks arrive on.
    #[must_use]
    pub fn new(period: Duration) -> (Self, Receiver<Tick>) {
        let (ticks, rx) = mpsc::channel();
        let scheduler = Self {
            period,
            generation: 0,
            armed: None,
            ticks,
        };
        (scheduler, rx)
    }

    /// Current tick period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Generation of the armed timer, if one is armed.
    #[must_use]
    pub const fn current(&self) -> Option<u64> {
        if self.armed.is_some() {
            Some(self.generation)
        } else {
            None
        }
    }

    /// Whether a timer is armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Arm a fresh timer, replacing any armed one.
    pub fn arm(&mut self) {
        self.cancel();
        self.generation += 1;
        debug!(generation = self.generation, period = ?self.period, "timer armed");
        self.armed = Some(ArmedTimer::spawn(
            self.generation,
            self.period,
            self.ticks.clone(),
        ));
    }

    /// Cancel the armed timer, if any. Ticks it already sent become stale.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.armed.take() {
            timer.cancel();
            debug!(generation = self.generation, "timer cancelled");
            self.generation += 1;
        }
    }

    /// Arm when `running` and disarmed; cancel when not `running` and armed.
    pub fn sync(&mut self, running: bool) {
        match (running, self.is_armed()) {
            (true, false) => self.arm(),
            (false, true) => self.cancel(),
            _ => {}
        }
    }

    /// Change the period. An armed timer is replaced by one with the new period.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
        if self.is_armed() {
            self.arm();
        }
    }

    /// Whether `tick` came from the currently armed timer.
    #[must_use]
    pub fn accept(&self, tick: Tick) -> bool {
        self.current() == Some(tick.generation)
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
