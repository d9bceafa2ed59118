//! Configuration settings for pomo.
//!
//! Settings are loaded from `~/.pomo/config.yaml`. Every field is optional;
//! anything missing falls back to its default.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::PomoError;
use crate::pomodoro::durations::{BREAK_DEFAULT, FOCUS_DEFAULT};
use crate::pomodoro::scheduler::DEFAULT_PERIOD_MS;
use crate::pomodoro::DurationConfig;

/// Shortest tick period accepted from configuration.
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer settings.
    pub timer: TimerConfig,
    /// Phase-change cue settings.
    pub sound: SoundConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Initial focus duration in minutes (5-60, multiple of 5).
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Initial break duration in minutes (1-15).
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Milliseconds between ticks. Each tick counts one second off the clock.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

/// Phase-change cue settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Play a cue when switching between focus and break.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Command to run instead of the terminal bell, as an argv list.
    #[serde(default)]
    pub command: Option<Vec<String>>,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_focus_minutes() -> u32 {
    FOCUS_DEFAULT
}

const fn default_break_minutes() -> u32 {
    BREAK_DEFAULT
}

const fn default_tick_interval_ms() -> u64 {
    DEFAULT_PERIOD_MS
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            break_minutes: default_break_minutes(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            command: None,
        }
    }
}

impl GeneralConfig {
    /// Apply the color setting to all `colored` output.
    pub fn apply_color(&self) {
        match self.color {
            ColorSetting::Always => colored::control::set_override(true),
            ColorSetting::Never => colored::control::set_override(false),
            ColorSetting::Auto => {}
        }
    }
}

impl TimerConfig {
    /// Validated initial durations.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Config` if either duration is outside its domain.
    pub fn durations(&self) -> Result<DurationConfig, PomoError> {
        DurationConfig::new(self.focus_minutes, self.break_minutes)
    }

    /// Validated tick period.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Config` if the interval is shorter than
    /// [`MIN_TICK_INTERVAL_MS`].
    pub fn tick_period(&self) -> Result<Duration, PomoError> {
        if self.tick_interval_ms < MIN_TICK_INTERVAL_MS {
            return Err(PomoError::Config(format!(
                "tick_interval_ms must be at least {MIN_TICK_INTERVAL_MS}, got {}",
                self.tick_interval_ms
            )));
        }
        Ok(Duration::from_millis(self.tick_interval_ms))
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// holds invalid values.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.validate().map_err(|e| match e {
            PomoError::Config(msg) => PomoError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })?;

        Ok(config)
    }

    /// Check every value that has a restricted domain.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Config` describing the first invalid value.
    pub fn validate(&self) -> Result<(), PomoError> {
        self.timer.durations()?;
        self.timer.tick_period()?;
        Ok(())
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PomoError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PomoError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
