//! The Pomodoro clock: phases, their lengths, and the controller tying them
//! to the countdown engine.

mod controller;
mod phase;
mod settings;

pub use controller::{Clock, Command, Snapshot, Transition};
pub use phase::Phase;
pub use settings::{
    Settings, DEFAULT_BREAK_LENGTH, DEFAULT_SESSION_LENGTH, MAX_LENGTH, MIN_LENGTH,
};
