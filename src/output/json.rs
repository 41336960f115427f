//! JSON output formatting for pomoclock.
//!
//! Streaming output is one compact object per line, tagged by `event`.

use serde::Serialize;
use serde_json::json;

use crate::clock::{Snapshot, Transition};
use crate::error::ClockError;

/// Format a countdown tick as a JSON line.
///
/// # Errors
///
/// Returns `ClockError::Parse` if JSON serialization fails.
pub fn format_snapshot_json(snapshot: &Snapshot) -> Result<String, ClockError> {
    let output = json!({
        "event": "tick",
        "clock": snapshot,
    });
    Ok(serde_json::to_string(&output)?)
}

/// Format a phase change as a JSON line.
///
/// # Errors
///
/// Returns `ClockError::Parse` if JSON serialization fails.
pub fn format_transition_json(transition: &Transition) -> Result<String, ClockError> {
    let output = json!({
        "event": "transition",
        "transition": transition,
    });
    Ok(serde_json::to_string(&output)?)
}

/// Format the end-of-run summary as a JSON line.
///
/// # Errors
///
/// Returns `ClockError::Parse` if JSON serialization fails.
pub fn format_summary_json(phases: u32) -> Result<String, ClockError> {
    let output = json!({
        "event": "finished",
        "phases": phases,
    });
    Ok(serde_json::to_string(&output)?)
}

/// Serialize any value as pretty JSON.
///
/// # Errors
///
/// Returns `ClockError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, ClockError> {
    Ok(serde_json::to_string_pretty(value)?)
}
