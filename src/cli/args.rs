use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::clock::{DEFAULT_BREAK_LENGTH, DEFAULT_SESSION_LENGTH};

#[derive(Parser)]
#[command(name = "pomoclock")]
#[command(about = "A Pomodoro clock for the terminal")]
#[command(long_about = "pomoclock - A Pomodoro clock for the terminal

Alternates work sessions and breaks, ringing an alarm each time one runs
out. Session and break lengths are adjustable from 1 to 60 minutes while
the clock is not running.

QUICK START:
  pomoclock                 Open the interactive clock
  pomoclock watch           Print a countdown without taking over the terminal
  pomoclock config init     Write a default config file

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  pomoclock <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output. Defaults to `general.default_output` from
    /// the config file.
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

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive clock (default)
    ///
    /// Shows the break and session lengths, the active phase and the time
    /// left. Press ? inside the clock for key bindings.
    ///
    /// # Keys
    ///
    ///   space/enter   Start, pause or resume
    ///   r             Reset to 25/5 and stop
    ///   k/j           Session length up/down
    ///   l/h           Break length up/down
    ///   q             Quit
    Tui(TuiArgs),

    /// Run the clock without a full-screen interface
    ///
    /// Starts a session immediately and prints one line per tick. Phase
    /// changes are announced as they happen.
    ///
    /// # Examples
    ///
    ///   pomoclock watch                        25/5 until interrupted
    ///   pomoclock watch -s 50 -b 10 --phases 2 One session and one break
    ///   pomoclock watch -o json | jq .         Stream snapshots as JSON
    #[command(alias = "w")]
    Watch(WatchArgs),

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pomoclock completions bash > ~/.local/share/bash-completion/completions/pomoclock
    ///   pomoclock completions zsh > ~/.zsh/completions/_pomoclock
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the interactive clock.
#[derive(Args, Debug, Default, Clone)]
pub struct TuiArgs {
    /// Never play the alarm
    #[arg(long, short = 'm')]
    pub mute: bool,
}

/// Arguments for the non-interactive clock.
#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    /// Session length in minutes (1-60)
    #[arg(long, short = 's', default_value_t = DEFAULT_SESSION_LENGTH,
          value_parser = clap::value_parser!(u32).range(1..=60))]
    pub session: u32,

    /// Break length in minutes (1-60)
    #[arg(long = "break", short = 'b', default_value_t = DEFAULT_BREAK_LENGTH,
          value_parser = clap::value_parser!(u32).range(1..=60))]
    pub break_length: u32,

    /// Stop after this many phases have run out
    #[arg(long, short = 'p', value_parser = clap::value_parser!(u32).range(1..))]
    pub phases: Option<u32>,

    /// Milliseconds per tick
    #[arg(long, default_value_t = 1000, hide = true,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Never play the alarm
    #[arg(long, short = 'm')]
    pub mute: bool,
}

/// Arguments for config management.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing config file
        #[arg(long, short = 'f')]
        force: bool,
    },
}
