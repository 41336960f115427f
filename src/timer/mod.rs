//! Countdown engine and tick source.
//!
//! - [`Timer`] counts an armed duration down one tick at a time
//! - [`Ticker`] converts wall-clock time into ticks for it

mod engine;
mod ticker;

pub use engine::{
    format_duration, format_duration_mmss, render_progress_bar, Timer, TimerEvent, TimerState,
};
pub use ticker::Ticker;
