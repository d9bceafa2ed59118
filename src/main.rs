use clap::Parser;
use colored::Colorize;

use pomo::cli::args::{Cli, Commands, StartArgs};
use pomo::cli::commands;
use pomo::config::{Config, Paths};
use pomo::error::PomoError;

fn main() {
    if let Err(e) = run() {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<(), PomoError> {
    let cli = Cli::parse();

    // Logging is best-effort: a read-only data dir must not stop the timer.
    if let Err(e) = pomo::logging::init() {
        eprintln!("{}: logging disabled: {e}", "warning".yellow().bold());
    }

    let output = match cli.command {
        Some(Commands::Completions { shell }) => commands::completions(shell)?,
        Some(Commands::Config(args)) => {
            commands::config(&Paths::new()?, args.command, cli.output)?
        }
        command => {
            let paths = Paths::new()?;
            let config = Config::load_from_path(&paths.config_file)?;
            config.general.apply_color();
            let format = cli.output.unwrap_or(config.general.default_output);
            let args = match command {
                Some(Commands::Start(args)) => args,
                _ => StartArgs::default(),
            };
            commands::start(&config, &args, format)?
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
