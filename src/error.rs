//! Error types for pomo.

use thiserror::Error;

/// Errors that can occur while running pomo.
///
/// The timer core never fails; every variant here belongs to the
/// application shell around it (configuration, terminal, output).
#[derive(Debug, Error)]
pub enum PomoError {
    /// Configuration could not be loaded, saved, or validated.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The terminal could not be set up, drawn to, or read from.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Output could not be serialized.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Underlying I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PomoError {
    /// Build a terminal error from anything displayable.
    pub fn terminal(message: impl std::fmt::Display) -> Self {
        Self::Terminal(message.to_string())
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Terminal(_) | Self::Parse(_) | Self::Io(_) => 1,
        }
    }
}

impl From<serde_json::Error> for PomoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PomoError::Config("focus_minutes out of range".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: focus_minutes out of range"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(PomoError::Config(String::new()).exit_code(), 2);
        assert_eq!(PomoError::terminal("raw mode").exit_code(), 1);
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PomoError = io.into();
        assert!(matches!(err, PomoError::Io(_)));
    }
}
