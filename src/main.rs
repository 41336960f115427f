use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pomoclock::cli::args::{Cli, Commands, TuiArgs};
use pomoclock::cli::commands;
use pomoclock::config::{Config, Paths};
use pomoclock::error::ClockError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ClockError> {
    let cli = Cli::parse();
    pomoclock::logging::init_tracing();

    let paths = Paths::default();
    let command = cli.command.unwrap_or_else(|| Commands::Tui(TuiArgs::default()));

    let output = match command {
        // Config management must work even when the file is broken
        Commands::Config(args) => {
            commands::config(&paths, args.command, cli.output.unwrap_or_default())?
        }
        Commands::Tui(args) => {
            let config = load_config(&paths)?;
            commands::tui(&args, &config)?
        }
        Commands::Watch(args) => {
            let config = load_config(&paths)?;
            let format = cli.output.unwrap_or(config.general.default_output);
            commands::watch(&args, &config, format)?
        }
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn load_config(paths: &Paths) -> Result<Config, ClockError> {
    let config = Config::load(paths)?;
    config.general.color.apply();
    Ok(config)
}
