//! pomo - A Pomodoro focus timer for the terminal
//!
//! The [`pomodoro`] module holds the timer core: a bounded duration store, the
//! focus/break state machine, and the tick scheduler that drives it. The
//! [`tui`] module renders it; [`cli`] wires configuration and commands around it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod pomodoro;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomoError;
pub use pomodoro::{Controller, Intent, Runtime, Snapshot};
