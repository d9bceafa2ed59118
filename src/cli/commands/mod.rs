//! Command implementations for pomo.

mod completions;
mod config;
mod start;

pub use completions::completions;
pub use config::config;
pub use start::{build_runtime, start};
