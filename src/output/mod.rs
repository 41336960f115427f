//! Output formatting for pomoclock.
//!
//! This module provides formatters for displaying clock state in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::clock::{Snapshot, Transition};
use crate::error::ClockError;

pub use json::*;
pub use pretty::*;

/// Format a countdown tick based on output format
///
/// # Errors
///
/// Returns `ClockError::Parse` if JSON serialization fails.
pub fn format_snapshot(
    snapshot: &Snapshot,
    progress: f64,
    format: OutputFormat,
) -> Result<String, ClockError> {
    match format {
        OutputFormat::Pretty => Ok(format_snapshot_pretty(snapshot, progress)),
        OutputFormat::Json => format_snapshot_json(snapshot),
    }
}

/// Format a phase change based on output format
///
/// # Errors
///
/// Returns `ClockError::Parse` if JSON serialization fails.
pub fn format_transition(
    transition: &Transition,
    format: OutputFormat,
) -> Result<String, ClockError> {
    match format {
        OutputFormat::Pretty => Ok(format_transition_pretty(transition)),
        OutputFormat::Json => format_transition_json(transition),
    }
}

/// Format the end-of-run summary based on output format
///
/// # Errors
///
/// Returns `ClockError::Parse` if JSON serialization fails.
pub fn format_summary(phases: u32, format: OutputFormat) -> Result<String, ClockError> {
    match format {
        OutputFormat::Pretty => Ok(format_summary_pretty(phases)),
        OutputFormat::Json => format_summary_json(phases),
    }
}
