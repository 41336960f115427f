//! Configuration management for pomoclock.
//!
//! This module handles loading and saving configuration from `~/.pomoclock/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{AlarmConfig, AlarmKind, ColorSetting, Config, DisplayConfig, GeneralConfig};
