//! Pomodoro timer core.
//!
//! - Duration store with bounded focus/break adjustment
//! - Session state machine (idle, focusing, on break)
//! - Tick scheduler with stale-tick rejection
//! - Audible cue on phase changes

pub mod controller;
pub mod durations;
pub mod format;
pub mod notify;
pub mod runtime;
pub mod scheduler;
pub mod session;

pub use controller::{Controller, Intent, Snapshot, TickOutcome};
pub use durations::DurationConfig;
pub use format::{minutes_to_duration, parse_minutes, seconds_to_duration};
pub use notify::{BellNotifier, CommandNotifier, Notifier, SilentNotifier};
pub use runtime::Runtime;
pub use scheduler::{Tick, TickScheduler};
pub use session::{Phase, PhaseState, Session};
