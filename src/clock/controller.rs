//! The phase controller.
//!
//! [`Clock`] owns the countdown engine, the phase lengths, the active phase
//! and the alarm. Views feed it [`Command`]s and ticks; it reacts to the
//! engine's exhaustion event by swapping phases and re-arming.

use chrono::Duration;
use serde::Serialize;

use crate::alarm::Alarm;
use crate::clock::{Phase, Settings};
use crate::timer::{format_duration_mmss, Timer, TimerEvent, TimerState};

/// Seconds left below which a running countdown counts as its final minute.
const FINAL_MINUTE_SECONDS: u32 = 60;

/// A user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Lengthen a phase by one minute.
    Increment(Phase),
    /// Shorten a phase by one minute.
    Decrement(Phase),
    /// Start, pause, or resume the countdown.
    StartStop,
    /// Return everything to its initial state.
    Reset,
}

/// A completed phase handing over to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// Phase that just ran out.
    pub from: Phase,
    /// Phase now counting down.
    pub to: Phase,
    /// Length the engine was re-armed with.
    pub duration_seconds: u32,
}

/// Serializable view of the clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub state: TimerState,
    pub remaining_seconds: u32,
    pub time_left: String,
    pub session_length: u32,
    pub break_length: u32,
    pub final_minute: bool,
}

/// A Pomodoro clock.
pub struct Clock {
    timer: Timer,
    settings: Settings,
    phase: Phase,
    alarm: Box<dyn Alarm>,
}

impl Clock {
    /// Create a stopped clock with default lengths.
    #[must_use]
    pub fn new(alarm: Box<dyn Alarm>) -> Self {
        Self::with_settings(Settings::default(), alarm)
    }

    /// Create a stopped clock with the given lengths.
    ///
    /// A reset still restores the defaults.
    #[must_use]
    pub fn with_settings(settings: Settings, alarm: Box<dyn Alarm>) -> Self {
        Self {
            timer: Timer::new(),
            settings,
            phase: Phase::Session,
            alarm,
        }
    }

    /// Apply a user command.
    ///
    /// Returns true if the command changed anything. Commands that are not
    /// allowed in the current state are ignored.
    pub fn apply(&mut self, command: Command) -> bool {
        tracing::debug!(?command, state = %self.timer.state(), "command");

        match command {
            Command::Increment(phase) => self.adjust(phase, Settings::increment),
            Command::Decrement(phase) => self.adjust(phase, Settings::decrement),
            Command::StartStop => self.start_stop(),
            Command::Reset => {
                self.reset();
                true
            }
        }
    }

    fn adjust(&mut self, phase: Phase, op: fn(&mut Settings, Phase) -> bool) -> bool {
        if self.timer.is_running() {
            return false;
        }
        op(&mut self.settings, phase)
    }

    /// Toggle the countdown: arm a session when stopped, resume when paused,
    /// pause when running.
    pub fn start_stop(&mut self) -> bool {
        match self.timer.state() {
            TimerState::Stopped => {
                let started = self.timer.start(Some(self.settings.duration(self.phase)));
                if started {
                    tracing::info!(phase = %self.phase, "countdown started");
                }
                started
            }
            TimerState::Paused => self.timer.start(None),
            TimerState::Running => self.timer.pause(),
        }
    }

    /// Silence the alarm and restore the initial state.
    pub fn reset(&mut self) {
        self.alarm.stop();
        self.phase = Phase::Session;
        self.settings = Settings::default();
        self.timer.reset();
        tracing::info!("clock reset");
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the transition if the active phase ran out.
    pub fn tick(&mut self) -> Option<Transition> {
        match self.timer.tick()? {
            TimerEvent::DurationExhausted => Some(self.switch_phase()),
        }
    }

    /// Advance the countdown by several seconds, collecting transitions.
    pub fn advance(&mut self, ticks: u32) -> Vec<Transition> {
        (0..ticks).filter_map(|_| self.tick()).collect()
    }

    fn switch_phase(&mut self) -> Transition {
        self.alarm.play();

        let from = self.phase;
        let to = from.next();
        let duration = self.settings.duration(to);

        self.phase = to;
        self.timer.start(Some(duration));

        let transition = Transition {
            from,
            to,
            duration_seconds: self.timer.remaining_seconds(),
        };
        tracing::info!(%from, %to, seconds = transition.duration_seconds, "phase switched");
        transition
    }

    /// The active phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The current phase lengths.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The engine state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.timer.state()
    }

    /// Whether the countdown is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Seconds left in the armed countdown.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.timer.remaining_seconds()
    }

    /// Fraction of the current countdown already elapsed.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.timer.progress()
    }

    /// Text for the time-left display.
    ///
    /// While stopped nothing is armed, so this previews the session length.
    #[must_use]
    pub fn time_left_display(&self) -> String {
        match self.timer.state() {
            TimerState::Stopped => format_duration_mmss(Duration::minutes(i64::from(
                self.settings.session_length(),
            ))),
            TimerState::Running | TimerState::Paused => self.timer.display(),
        }
    }

    /// Whether a running countdown is in its last minute.
    #[must_use]
    pub fn in_final_minute(&self) -> bool {
        self.timer.is_running() && self.timer.remaining_seconds() < FINAL_MINUTE_SECONDS
    }

    /// Capture the clock for output.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            state: self.timer.state(),
            remaining_seconds: self.timer.remaining_seconds(),
            time_left: self.time_left_display(),
            session_length: self.settings.session_length(),
            break_length: self.settings.break_length(),
            final_minute: self.in_final_minute(),
        }
    }
}

impl std::fmt::Debug for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clock")
            .field("timer", &self.timer)
            .field("settings", &self.settings)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
