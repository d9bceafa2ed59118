//! Configuration command implementation.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::PomoError;
use crate::output::format_config;

/// Execute config subcommands.
///
/// `show` is the only subcommand that reads the file, so `path` and `init`
/// still work when the existing file is broken.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read or written.
pub fn config(
    paths: &Paths,
    cmd: ConfigCommands,
    output: Option<OutputFormat>,
) -> Result<String, PomoError> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_from_path(&paths.config_file)?;
            config.general.apply_color();
            let format = output.unwrap_or(config.general.default_output);
            format_config(&config, &paths.config_file, format)
        }
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
        ConfigCommands::Init { force } => init(paths, force),
    }
}

fn init(paths: &Paths, force: bool) -> Result<String, PomoError> {
    if paths.config_file.exists() && !force {
        return Err(PomoError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            paths.config_file.display()
        )));
    }

    paths.ensure_dirs()?;
    Config::default().save_to_path(&paths.config_file)?;
    tracing::info!(path = %paths.config_file.display(), "wrote default config");

    Ok(format!(
        "{} {}",
        "Wrote".green(),
        paths.config_file.display()
    ))
}
