use std::fmt::Write;
use std::path::Path;

use colored::Colorize;

use crate::config::Config;
use crate::pomodoro::{minutes_to_duration, seconds_to_duration, PhaseState, Snapshot};

/// Format the configuration as labelled sections
pub fn format_config_pretty(config: &Config, path: &Path) -> String {
    let mut output = String::new();

    let origin = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not created, using defaults)", path.display())
    };
    let _ = writeln!(output, "{}", "Configuration".bold());
    let _ = writeln!(output, "  {}: {origin}", "File".dimmed());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    let _ = writeln!(output, "{}", "Timer".cyan().bold());
    let _ = writeln!(
        output,
        "  {}: {}",
        "Focus".dimmed(),
        minutes_to_duration(config.timer.focus_minutes)
    );
    let _ = writeln!(
        output,
        "  {}: {}",
        "Break".dimmed(),
        minutes_to_duration(config.timer.break_minutes)
    );
    let _ = writeln!(
        output,
        "  {}: {} ms",
        "Tick".dimmed(),
        config.timer.tick_interval_ms
    );

    let _ = writeln!(output, "{}", "Sound".cyan().bold());
    let cue = match (&config.sound.command, config.sound.enabled) {
        (_, false) => "off".to_string(),
        (Some(argv), true) if !argv.is_empty() => argv.join(" "),
        _ => "terminal bell".to_string(),
    };
    let _ = write!(output, "  {}: {cue}", "Cue".dimmed());

    output
}

/// Format a snapshot as a one-line status
pub fn format_snapshot_pretty(snapshot: &Snapshot) -> String {
    let (Some(minutes), Some(remaining)) = (snapshot.phase_minutes(), snapshot.remaining_seconds)
    else {
        return format!(
            "{} (focus {}, break {})",
            "Idle".dimmed(),
            minutes_to_duration(snapshot.focus_minutes),
            minutes_to_duration(snapshot.break_minutes)
        );
    };

    let phase = match snapshot.phase {
        PhaseState::OnBreak => snapshot.phase.to_string().green(),
        _ => snapshot.phase.to_string().yellow(),
    };
    let state = if snapshot.running { "" } else { " [PAUSED]" };

    format!(
        "{} for {} - {} remaining ({}%){state}",
        phase.bold(),
        minutes_to_duration(minutes),
        seconds_to_duration(remaining),
        snapshot.percent()
    )
}
