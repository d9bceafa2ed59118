//! JSON output formatting for pomo.

use std::path::Path;

use serde_json::json;

use crate::config::Config;
use crate::error::PomoError;
use crate::pomodoro::Snapshot;

/// Format the configuration as JSON, together with the file it came from
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_config_json(config: &Config, path: &Path) -> Result<String, PomoError> {
    let output = json!({
        "path": path.display().to_string(),
        "exists": path.exists(),
        "config": config,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a snapshot as JSON, including derived progress
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_snapshot_json(snapshot: &Snapshot) -> Result<String, PomoError> {
    let output = json!({
        "snapshot": snapshot,
        "progress": snapshot.progress(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
