//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::clock::{Clock, Command, Transition};
use crate::config::DisplayConfig;
use crate::timer::{format_duration, Ticker};

/// Longest the event loop waits for input before redrawing.
const MAX_POLL: Duration = Duration::from_millis(250);

/// Key binding summary shown by default and on `?`.
pub const HELP: &str =
    "space:start/pause | r:reset | k/j:session +/- | l/h:break +/- | ?:help | q:quit";

/// Application state.
pub struct App {
    /// The clock being displayed.
    pub clock: Clock,
    /// Converts elapsed time into clock ticks.
    ticker: Ticker,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Whether to pulse the clock during the final minute.
    pulse_final_minute: bool,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(clock: Clock, display: &DisplayConfig) -> Self {
        Self {
            clock,
            ticker: Ticker::default(),
            status: None,
            should_quit: false,
            pulse_final_minute: display.pulse_final_minute,
        }
    }

    /// Apply a clock command.
    pub fn handle_command(&mut self, command: Command, now: Instant) {
        // Bank elapsed time before the command changes what it applies to
        self.on_tick(now);

        if self.clock.apply(command) {
            self.status = None;
        }

        if command == Command::Reset {
            self.ticker.reset();
        }

        // Anchor a fresh interval if the command started the countdown
        self.ticker.elapsed_ticks(now, self.clock.is_running());
    }

    /// Feed elapsed time to the clock.
    pub fn on_tick(&mut self, now: Instant) {
        let ticks = self.ticker.elapsed_ticks(now, self.clock.is_running());
        for transition in self.clock.advance(ticks) {
            self.announce(transition);
        }
    }

    fn announce(&mut self, transition: Transition) {
        let length = chrono::Duration::seconds(i64::from(transition.duration_seconds));
        self.status = Some(format!(
            "{} complete, {} started ({})",
            transition.from,
            transition.to,
            format_duration(length)
        ));
    }

    /// Show the key bindings.
    pub fn show_help(&mut self) {
        self.status = Some(HELP.to_string());
    }

    /// How long to wait for input before the next tick is due.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        if self.clock.is_running() {
            self.ticker.until_next(now).min(MAX_POLL)
        } else {
            MAX_POLL
        }
    }

    /// Whether the final-minute highlight is lit this second.
    #[must_use]
    pub fn pulse(&self) -> bool {
        self.pulse_final_minute
            && self.clock.in_final_minute()
            && self.clock.remaining_seconds() % 2 == 0
    }
}
