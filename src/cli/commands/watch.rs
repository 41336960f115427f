//! Non-interactive clock.
//!
//! Runs the same controller as the TUI, printing a line per tick instead of
//! drawing a screen.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use crate::alarm;
use crate::cli::args::{OutputFormat, WatchArgs};
use crate::clock::{Clock, Command, Settings};
use crate::config::Config;
use crate::error::ClockError;
use crate::output::{format_snapshot, format_summary, format_transition};
use crate::timer::Ticker;

/// A clock streaming its state to a writer.
pub struct Watch<W: Write> {
    out: W,
    clock: Clock,
    format: OutputFormat,
    phase_limit: Option<u32>,
    completed: u32,
}

impl<W: Write> Watch<W> {
    /// Wrap a clock. Stops after `phase_limit` phases when given.
    pub fn new(out: W, clock: Clock, format: OutputFormat, phase_limit: Option<u32>) -> Self {
        Self {
            out,
            clock,
            format,
            phase_limit,
            completed: 0,
        }
    }

    /// Start the countdown and print the first line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn begin(&mut self) -> Result<(), ClockError> {
        self.clock.apply(Command::StartStop);
        self.emit_snapshot()
    }

    /// Advance one tick and print the result.
    ///
    /// Returns true once the phase limit is reached.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn on_tick(&mut self) -> Result<bool, ClockError> {
        if let Some(transition) = self.clock.tick() {
            let line = format_transition(&transition, self.format)?;
            writeln!(self.out, "{line}")?;
            self.completed += 1;

            if self.phase_limit.is_some_and(|limit| self.completed >= limit) {
                self.out.flush()?;
                return Ok(true);
            }
        }

        self.emit_snapshot()?;
        Ok(false)
    }

    fn emit_snapshot(&mut self) -> Result<(), ClockError> {
        let line = format_snapshot(&self.clock.snapshot(), self.clock.progress(), self.format)?;
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Phases completed so far.
    #[must_use]
    pub const fn completed(&self) -> u32 {
        self.completed
    }

    /// Whether the clock is counting.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Consume the watcher and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Execute the watch command.
///
/// Streams to stdout and returns the end-of-run summary. A bell alarm rings
/// on stderr.
///
/// # Errors
///
/// Returns an error if the lengths are invalid or stdout cannot be written.
pub fn watch(args: &WatchArgs, config: &Config, format: OutputFormat) -> Result<String, ClockError> {
    let settings = Settings::new(args.session, args.break_length)?;
    // Stdout carries the stream, so the bell rings on stderr
    let alarm = alarm::from_config(&config.alarm, args.mute, std::io::stderr());
    let clock = Clock::with_settings(settings, alarm);
    let mut ticker = Ticker::new(Duration::from_millis(args.tick_ms));

    let mut watch = Watch::new(std::io::stdout(), clock, format, args.phases);
    watch.begin()?;
    ticker.elapsed_ticks(Instant::now(), watch.is_running());

    loop {
        thread::sleep(ticker.until_next(Instant::now()));

        for _ in 0..ticker.elapsed_ticks(Instant::now(), watch.is_running()) {
            if watch.on_tick()? {
                return format_summary(watch.completed(), format);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::SilentAlarm;

    fn watcher(format: OutputFormat, limit: Option<u32>) -> Watch<Vec<u8>> {
        let settings = Settings::new(1, 1).unwrap();
        let clock = Clock::with_settings(settings, Box::new(SilentAlarm));
        Watch::new(Vec::new(), clock, format, limit)
    }

    #[test]
    fn test_watch_stops_at_phase_limit() {
        colored::control::set_override(false);

        let mut watch = watcher(OutputFormat::Pretty, Some(2));
        watch.begin().unwrap();

        let mut ticks = 0;
        while !watch.on_tick().unwrap() {
            ticks += 1;
            assert!(ticks < 1000, "watch never finished");
        }

        assert_eq!(ticks + 1, 120);
        assert_eq!(watch.completed(), 2);

        let output = String::from_utf8(watch.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("Session 01:00"));
        assert!(lines[1].starts_with("Session 00:59"));
        assert!(output.contains("Session complete, starting Break"));
        assert!(output.contains("Break complete, starting Session"));
        assert!(lines.last().unwrap().contains("Break complete"));
    }

    #[test]
    fn test_watch_json_lines() {
        let mut watch = watcher(OutputFormat::Json, Some(1));
        watch.begin().unwrap();
        while !watch.on_tick().unwrap() {}

        let output = String::from_utf8(watch.into_inner()).unwrap();
        let events: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        // Initial line, 59 ticks, then the transition
        assert_eq!(events.len(), 61);
        assert_eq!(events[0]["clock"]["time_left"], "01:00");
        assert_eq!(events[59]["clock"]["time_left"], "00:01");
        assert_eq!(events[60]["event"], "transition");
        assert_eq!(events[60]["transition"]["to"], "break");
    }

    #[test]
    fn test_watch_without_limit_keeps_going() {
        let mut watch = watcher(OutputFormat::Json, None);
        watch.begin().unwrap();

        for _ in 0..300 {
            assert!(!watch.on_tick().unwrap());
        }
        assert_eq!(watch.completed(), 5);
    }
}
