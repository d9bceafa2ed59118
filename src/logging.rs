//! Logging configuration using tracing.
//!
//! The terminal belongs to the UI, so logs go to a daily rolling file under
//! the platform data directory (e.g. `~/.local/share/pomo/logs/`).
//! The level is controlled by the `POMO_LOG` environment variable.
//!
//! ```bash
//! POMO_LOG=debug pomo
//! POMO_LOG=pomo=trace pomo
//! ```

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::PomoError;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "POMO_LOG";

const LOG_FILE_PREFIX: &str = "pomo.log";

/// Initialize the logging subsystem.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
pub fn init() -> Result<(), PomoError> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("pomo=info,warn"));

    // A subscriber may already be installed (e.g. by a test harness).
    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "pomo starting");
        tracing::info!("Log directory: {}", log_dir.display());
    }

    Ok(())
}

/// Directory log files are written to.
#[must_use]
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("pomo").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_ends_with_pomo_logs() {
        let dir = log_directory();
        assert!(dir.ends_with("pomo/logs"));
    }
}
