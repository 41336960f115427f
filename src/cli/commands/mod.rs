//! Command implementations for pomoclock.
//!
//! Each command returns the text to print once it finishes.

mod completions;
mod config;
mod watch;

pub use completions::completions;
pub use config::config;
pub use watch::{watch, Watch};

use crate::cli::args::TuiArgs;
use crate::config::Config;
use crate::error::ClockError;

/// Execute the interactive clock.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn tui(args: &TuiArgs, config: &Config) -> Result<String, ClockError> {
    crate::tui::run(config, args.mute)?;
    Ok(String::new())
}
