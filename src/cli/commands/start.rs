//! Start command implementation: opens the interactive timer.

use crate::cli::args::{OutputFormat, StartArgs};
use crate::config::Config;
use crate::error::PomoError;
use crate::output::format_snapshot;
use crate::pomodoro::notify::{self, Notifier, SilentNotifier};
use crate::pomodoro::{DurationConfig, Runtime};

/// Open the timer UI and block until the user quits.
///
/// If a session was still active on quit, its final state is returned as
/// output so it stays visible after the alternate screen is gone.
///
/// # Errors
///
/// Returns an error if an override is out of range or the terminal fails.
pub fn start(config: &Config, args: &StartArgs, format: OutputFormat) -> Result<String, PomoError> {
    let runtime = build_runtime(config, args)?;
    let last = crate::tui::run(runtime)?;

    if last.has_session() {
        format_snapshot(&last, format)
    } else {
        Ok(String::new())
    }
}

/// Combine configuration and command-line overrides into an idle runtime.
///
/// # Errors
///
/// Returns `PomoError::Config` if a duration or tick interval is invalid.
pub fn build_runtime(config: &Config, args: &StartArgs) -> Result<Runtime, PomoError> {
    let durations = DurationConfig::new(
        args.focus.unwrap_or(config.timer.focus_minutes),
        args.break_minutes.unwrap_or(config.timer.break_minutes),
    )?;

    let mut timer = config.timer.clone();
    if let Some(ms) = args.tick_ms {
        timer.tick_interval_ms = ms;
    }
    let period = timer.tick_period()?;

    let notifier: Box<dyn Notifier> = if args.silent {
        Box::new(SilentNotifier)
    } else {
        notify::from_config(&config.sound)
    };

    tracing::info!(
        focus = durations.focus_minutes(),
        break_minutes = durations.break_minutes(),
        ?period,
        silent = args.silent,
        "starting timer"
    );

    Ok(Runtime::new(durations, period, notifier))
}
