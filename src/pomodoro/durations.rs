//! Focus and break duration store.
//!
//! Both durations live in a bounded domain. Adjustments that would leave the
//! domain are silently ignored, so the store can never hold an invalid value.

use serde::{Deserialize, Serialize};

use crate::error::PomoError;

/// Shortest focus interval in minutes.
pub const FOCUS_MIN: u32 = 5;
/// Longest focus interval in minutes.
pub const FOCUS_MAX: u32 = 60;
/// Focus adjustment step in minutes.
pub const FOCUS_STEP: u32 = 5;
/// Default focus interval in minutes.
pub const FOCUS_DEFAULT: u32 = 25;

/// Shortest break interval in minutes.
pub const BREAK_MIN: u32 = 1;
/// Longest break interval in minutes.
pub const BREAK_MAX: u32 = 15;
/// Break adjustment step in minutes.
pub const BREAK_STEP: u32 = 1;
/// Default break interval in minutes.
pub const BREAK_DEFAULT: u32 = 5;

/// Configured focus and break lengths, in minutes.
///
/// Deserialization goes through [`DurationConfig::new`], so a payload outside
/// the domain is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDurations")]
pub struct DurationConfig {
    focus_minutes: u32,
    break_minutes: u32,
}

/// Unchecked wire form of [`DurationConfig`].
#[derive(Deserialize)]
struct RawDurations {
    focus_minutes: u32,
    break_minutes: u32,
}

impl TryFrom<RawDurations> for DurationConfig {
    type Error = PomoError;

    fn try_from(raw: RawDurations) -> Result<Self, Self::Error> {
        Self::new(raw.focus_minutes, raw.break_minutes)
    }
}

impl DurationConfig {
    /// Create a duration config, validating both values.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Config` if either value is outside its domain, or if
    /// the focus value is not a multiple of the focus step.
    pub fn new(focus_minutes: u32, break_minutes: u32) -> Result<Self, PomoError> {
        if !(FOCUS_MIN..=FOCUS_MAX).contains(&focus_minutes) || focus_minutes % FOCUS_STEP != 0 {
            return Err(PomoError::Config(format!(
                "focus duration must be between {FOCUS_MIN} and {FOCUS_MAX} minutes in steps of {FOCUS_STEP}, got {focus_minutes}"
            )));
        }
        if !(BREAK_MIN..=BREAK_MAX).contains(&break_minutes) {
            return Err(PomoError::Config(format!(
                "break duration must be between {BREAK_MIN} and {BREAK_MAX} minutes, got {break_minutes}"
            )));
        }

        Ok(Self {
            focus_minutes,
            break_minutes,
        })
    }

    /// Focus interval in minutes.
    #[must_use]
    pub const fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    /// Break interval in minutes.
    #[must_use]
    pub const fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Lengthen the focus interval by one step, up to the maximum.
    pub fn increase_focus(&mut self) {
        if self.focus_minutes < FOCUS_MAX {
            self.focus_minutes += FOCUS_STEP;
        }
    }

    /// Shorten the focus interval by one step, down to the minimum.
    pub fn decrease_focus(&mut self) {
        if self.focus_minutes > FOCUS_MIN {
            self.focus_minutes -= FOCUS_STEP;
        }
    }

    /// Lengthen the break interval by one step, up to the maximum.
    pub fn increase_break(&mut self) {
        if self.break_minutes < BREAK_MAX {
            self.break_minutes += BREAK_STEP;
        }
    }

    /// Shorten the break interval by one step, down to the minimum.
    pub fn decrease_break(&mut self) {
        if self.break_minutes > BREAK_MIN {
            self.break_minutes -= BREAK_STEP;
        }
    }
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            focus_minutes: FOCUS_DEFAULT,
            break_minutes: BREAK_DEFAULT,
        }
    }
}
