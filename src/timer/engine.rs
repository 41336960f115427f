//! Countdown engine.
//!
//! The engine knows nothing about phases. It counts an armed duration down
//! one second per tick and reports exhaustion with [`TimerEvent`]; whoever
//! owns it decides what happens next.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Timer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// Nothing armed.
    #[default]
    Stopped,
    /// Counting down.
    Running,
    /// Armed but frozen.
    Paused,
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Stopped => "stopped",
            Self::Running => "running",
            Self::Paused => "paused",
        };
        write!(f, "{name}")
    }
}

/// Events reported by [`Timer::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The armed duration just reached zero.
    DurationExhausted,
}

/// A countdown timer.
#[derive(Debug, Clone, Default)]
pub struct Timer {
    /// Armed duration in seconds
    total_seconds: u32,
    /// Remaining seconds
    remaining_seconds: u32,
    /// Current state
    state: TimerState,
}

impl Timer {
    /// Create a stopped timer with nothing armed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_seconds: 0,
            remaining_seconds: 0,
            state: TimerState::Stopped,
        }
    }

    /// Start the timer.
    ///
    /// With `None`, resumes a paused countdown. With a duration, arms a
    /// fresh countdown; this is accepted while stopped, or while running
    /// with nothing left (re-arming after exhaustion).
    ///
    /// Returns true if the timer transitioned.
    pub fn start(&mut self, duration: Option<Duration>) -> bool {
        match (self.state, duration) {
            (TimerState::Paused, None) => {
                self.state = TimerState::Running;
                true
            }
            (TimerState::Stopped, Some(duration)) => self.arm(duration),
            (TimerState::Running, Some(duration)) if self.remaining_seconds == 0 => {
                self.arm(duration)
            }
            _ => false,
        }
    }

    fn arm(&mut self, duration: Duration) -> bool {
        let Ok(seconds) = u32::try_from(duration.num_seconds()) else {
            return false;
        };
        if seconds == 0 {
            return false;
        }

        self.total_seconds = seconds;
        self.remaining_seconds = seconds;
        self.state = TimerState::Running;
        true
    }

    /// Pause the timer.
    ///
    /// Returns true if the timer was running.
    pub fn pause(&mut self) -> bool {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
            true
        } else {
            false
        }
    }

    /// Stop the timer and clear the remaining time.
    pub fn reset(&mut self) {
        self.total_seconds = 0;
        self.remaining_seconds = 0;
        self.state = TimerState::Stopped;
    }

    /// Tick the timer by one second.
    ///
    /// Returns [`TimerEvent::DurationExhausted`] on the tick that reaches
    /// zero. The timer keeps running at zero until it is re-armed.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if self.state != TimerState::Running || self.remaining_seconds == 0 {
            return None;
        }

        self.remaining_seconds -= 1;

        if self.remaining_seconds == 0 {
            Some(TimerEvent::DurationExhausted)
        } else {
            None
        }
    }

    /// Get remaining time as Duration.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        Duration::seconds(i64::from(self.remaining_seconds))
    }

    /// Remaining whole seconds.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Get progress as a fraction of the armed duration (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        1.0 - (f64::from(self.remaining_seconds) / f64::from(self.total_seconds))
    }

    /// Check if the timer is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Check if a running countdown has reached zero.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state == TimerState::Running && self.remaining_seconds == 0
    }

    /// Get the current state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn display(&self) -> String {
        format_duration_mmss(self.remaining())
    }
}

/// Format a duration as MM:SS.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().max(0);
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_new() {
        let timer = Timer::new();
        assert_eq!(timer.state(), TimerState::Stopped);
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.display(), "00:00");
    }

    #[test]
    fn test_start_arms_countdown() {
        let mut timer = Timer::new();
        assert!(timer.start(Some(Duration::minutes(25))));
        assert!(timer.is_running());
        assert_eq!(timer.remaining_seconds(), 1500);
        assert_eq!(timer.display(), "25:00");
    }

    #[test]
    fn test_start_without_duration_while_stopped_is_rejected() {
        let mut timer = Timer::new();
        assert!(!timer.start(None));
        assert_eq!(timer.state(), TimerState::Stopped);
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut timer = Timer::new();
        timer.start(Some(Duration::minutes(5)));
        timer.tick();

        assert!(!timer.start(None));
        assert!(!timer.start(Some(Duration::minutes(25))));
        assert_eq!(timer.remaining_seconds(), 299);
    }

    #[test]
    fn test_start_rejects_empty_duration() {
        let mut timer = Timer::new();
        assert!(!timer.start(Some(Duration::zero())));
        assert!(!timer.start(Some(Duration::seconds(-5))));
        assert_eq!(timer.state(), TimerState::Stopped);
    }

    #[test]
    fn test_timer_tick() {
        let mut timer = Timer::new();
        timer.start(Some(Duration::minutes(1)));

        for _ in 0..59 {
            assert_eq!(timer.tick(), None);
            assert!(timer.is_running());
        }

        assert_eq!(timer.tick(), Some(TimerEvent::DurationExhausted));
        assert!(timer.is_running());
        assert!(timer.is_exhausted());
    }

    #[test]
    fn test_exhaustion_is_reported_once() {
        let mut timer = Timer::new();
        timer.start(Some(Duration::seconds(1)));

        assert_eq!(timer.tick(), Some(TimerEvent::DurationExhausted));
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn test_rearm_after_exhaustion() {
        let mut timer = Timer::new();
        timer.start(Some(Duration::seconds(1)));
        timer.tick();

        assert!(timer.start(Some(Duration::minutes(5))));
        assert_eq!(timer.remaining_seconds(), 300);
        assert!(!timer.is_exhausted());
    }

    #[test]
    fn test_timer_pause_resume() {
        let mut timer = Timer::new();
        timer.start(Some(Duration::minutes(25)));
        for _ in 0..37 {
            timer.tick();
        }

        assert!(timer.pause());
        assert_eq!(timer.state(), TimerState::Paused);
        let frozen = timer.remaining_seconds();

        // Ticks while paused do nothing
        for _ in 0..10 {
            assert_eq!(timer.tick(), None);
        }
        assert_eq!(timer.remaining_seconds(), frozen);

        assert!(timer.start(None));
        assert!(timer.is_running());
        assert_eq!(timer.remaining_seconds(), frozen);
    }

    #[test]
    fn test_pause_only_from_running() {
        let mut timer = Timer::new();
        assert!(!timer.pause());

        timer.start(Some(Duration::minutes(1)));
        timer.pause();
        assert!(!timer.pause());
        assert_eq!(timer.state(), TimerState::Paused);
    }

    #[test]
    fn test_paused_timer_ignores_new_duration() {
        let mut timer = Timer::new();
        timer.start(Some(Duration::minutes(10)));
        timer.pause();

        assert!(!timer.start(Some(Duration::minutes(1))));
        assert_eq!(timer.remaining_seconds(), 600);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut timer = Timer::new();
        timer.start(Some(Duration::minutes(10)));
        timer.tick();
        timer.reset();
        assert_eq!(timer.state(), TimerState::Stopped);
        assert_eq!(timer.remaining_seconds(), 0);

        timer.start(Some(Duration::minutes(10)));
        timer.pause();
        timer.reset();
        assert_eq!(timer.state(), TimerState::Stopped);
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_timer_progress() {
        let mut timer = Timer::new();
        timer.start(Some(Duration::seconds(100)));

        assert_eq!(timer.progress(), 0.0);

        for _ in 0..50 {
            timer.tick();
        }

        assert!((timer.progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::minutes(25)), "25 minutes");
        assert_eq!(format_duration(Duration::minutes(1)), "1 minute");
        assert_eq!(format_duration(Duration::hours(1)), "1 hour");
        assert_eq!(format_duration(Duration::seconds(45)), "45 seconds");
    }

    #[test]
    fn test_format_duration_mmss() {
        assert_eq!(format_duration_mmss(Duration::minutes(25)), "25:00");
        assert_eq!(format_duration_mmss(Duration::minutes(60)), "60:00");
        assert_eq!(format_duration_mmss(Duration::seconds(90)), "01:30");
        assert_eq!(format_duration_mmss(Duration::seconds(5)), "00:05");
        assert_eq!(format_duration_mmss(Duration::seconds(0)), "00:00");
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(0.5, 10);
        assert_eq!(bar, "[█████░░░░░]");
        assert_eq!(render_progress_bar(1.5, 4), "[████]");
    }
}
