use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::pomodoro::parse_minutes;

#[derive(Parser, Debug)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro focus timer for the terminal")]
#[command(long_about = "pomo - A Pomodoro focus timer for the terminal

Alternate between focused work and short breaks. Set the focus and break
lengths, press play, and pomo counts down, switches phases on its own and
rings when each phase begins.

QUICK START:
  pomo                      Open the timer with configured durations
  pomo start --focus 50m    Open the timer with a 50 minute focus phase
  pomo config show          Show the effective configuration

KEYS:
  space / p      Start, pause or resume
  s              Stop the session
  up / down      Focus duration +5 / -5 minutes (idle only)
  right / left   Break duration +1 / -1 minute (idle only)
  q              Quit

For more information on a specific command, run:
  pomo <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive timer
    ///
    /// This is also what runs when no command is given. Durations default to
    /// the values in ~/.pomo/config.yaml and can still be adjusted in the
    /// timer while no session is active.
    ///
    /// # Examples
    ///
    ///   pomo start
    ///   pomo start --focus 50m --break 10
    ///   pomo start --silent
    #[command(alias = "s")]
    Start(StartArgs),

    /// Inspect or initialize the configuration file
    ///
    /// # Subcommands
    ///
    ///   show     Print the effective configuration
    ///   path     Print the configuration file path
    ///   init     Write a default configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pomo completions bash > ~/.local/share/bash-completion/completions/pomo
    ///   pomo completions zsh > ~/.zfunc/_pomo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct StartArgs {
    /// Focus duration (e.g. 25, 25m, 1h)
    ///
    /// Must be between 5 and 60 minutes in steps of 5.
    #[arg(long, short = 'f', value_parser = parse_minutes_arg)]
    pub focus: Option<u32>,

    /// Break duration (e.g. 5, 5m)
    ///
    /// Must be between 1 and 15 minutes.
    #[arg(long = "break", short = 'b', value_parser = parse_minutes_arg)]
    pub break_minutes: Option<u32>,

    /// Milliseconds between ticks
    ///
    /// Each tick counts one second off the clock. Lower values speed the
    /// timer up, which is handy for trying out phase changes.
    #[arg(long, env = "POMO_TICK_MS")]
    pub tick_ms: Option<u64>,

    /// Do not play a cue on phase changes
    #[arg(long)]
    pub silent: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_minutes_arg(s: &str) -> Result<u32, String> {
    parse_minutes(s).ok_or_else(|| format!("invalid duration '{s}' (try 25, 25m or 1h)"))
}
