//! pomoclock - A Pomodoro clock for the terminal
//!
//! This crate provides a countdown engine, a controller alternating work
//! sessions and breaks on top of it, and terminal front ends for both.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod alarm;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use clock::{Clock, Command, Phase};
pub use error::ClockError;
