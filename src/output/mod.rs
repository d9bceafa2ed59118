//! Output formatting for pomo.
//!
//! This module renders configuration and timer snapshots for the terminal.

mod json;
mod pretty;

use std::path::Path;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomoError;
use crate::pomodoro::Snapshot;

pub use json::*;
pub use pretty::*;

/// Format the effective configuration based on output format
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_config(config: &Config, path: &Path, format: OutputFormat) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_config_pretty(config, path)),
        OutputFormat::Json => format_config_json(config, path),
    }
}

/// Format a timer snapshot based on output format
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_snapshot(snapshot: &Snapshot, format: OutputFormat) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_snapshot_pretty(snapshot)),
        OutputFormat::Json => format_snapshot_json(snapshot),
    }
}
