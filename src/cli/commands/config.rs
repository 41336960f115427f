//! Config command implementation.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::ClockError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written.
pub fn config(
    paths: &Paths,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, ClockError> {
    match cmd {
        ConfigCommands::Show => show_config(paths, format),
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
        ConfigCommands::Init { force } => init_config(paths, force, format),
    }
}

fn show_config(paths: &Paths, format: OutputFormat) -> Result<String, ClockError> {
    let config = Config::load(paths)?;

    match format {
        OutputFormat::Json => to_json(&config),
        OutputFormat::Pretty => {
            let source = if paths.config_file.exists() {
                paths.config_file.display().to_string()
            } else {
                "defaults (no config file)".to_string()
            };

            let mut output = vec![format!("# {source}").dimmed().to_string()];
            output.push(config.to_yaml()?.trim_end().to_string());
            Ok(output.join("\n"))
        }
    }
}

fn init_config(paths: &Paths, force: bool, format: OutputFormat) -> Result<String, ClockError> {
    if paths.config_file.exists() && !force {
        return Err(ClockError::Config(format!(
            "Config file already exists at {}. Use --force to overwrite it.",
            paths.config_file.display()
        )));
    }

    paths.ensure_dirs()?;
    Config::default().save_to_path(&paths.config_file)?;
    tracing::info!("wrote default config to {}", paths.config_file.display());

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "path": paths.config_file,
            "written": true,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "Wrote default config to".green(),
            paths.config_file.display()
        )),
    }
}
