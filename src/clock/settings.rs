//! User-adjustable phase lengths.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::clock::Phase;
use crate::error::ClockError;

/// Shortest allowed phase length, in minutes.
pub const MIN_LENGTH: u32 = 1;
/// Longest allowed phase length, in minutes.
pub const MAX_LENGTH: u32 = 60;
/// Session length after a reset, in minutes.
pub const DEFAULT_SESSION_LENGTH: u32 = 25;
/// Break length after a reset, in minutes.
pub const DEFAULT_BREAK_LENGTH: u32 = 5;

/// Session and break lengths in minutes, each within
/// [`MIN_LENGTH`]..=[`MAX_LENGTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    session_length: u32,
    break_length: u32,
}

impl Settings {
    /// Create settings from explicit lengths.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::InvalidArgument` if either length is out of range.
    pub fn new(session_length: u32, break_length: u32) -> Result<Self, ClockError> {
        for (name, value) in [("session", session_length), ("break", break_length)] {
            if !(MIN_LENGTH..=MAX_LENGTH).contains(&value) {
                return Err(ClockError::InvalidArgument(format!(
                    "{name} length must be between {MIN_LENGTH} and {MAX_LENGTH} minutes, got {value}"
                )));
            }
        }

        Ok(Self {
            session_length,
            break_length,
        })
    }

    /// Session length in minutes.
    #[must_use]
    pub const fn session_length(&self) -> u32 {
        self.session_length
    }

    /// Break length in minutes.
    #[must_use]
    pub const fn break_length(&self) -> u32 {
        self.break_length
    }

    /// Length of `phase` in minutes.
    #[must_use]
    pub const fn length(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Session => self.session_length,
            Phase::Break => self.break_length,
        }
    }

    /// Countdown duration for `phase`.
    #[must_use]
    pub fn duration(&self, phase: Phase) -> Duration {
        Duration::minutes(i64::from(self.length(phase)))
    }

    /// Lengthen `phase` by a minute.
    ///
    /// Returns false, leaving the length alone, if it is already at the maximum.
    pub fn increment(&mut self, phase: Phase) -> bool {
        let length = self.length_mut(phase);
        if *length >= MAX_LENGTH {
            return false;
        }
        *length += 1;
        true
    }

    /// Shorten `phase` by a minute.
    ///
    /// Returns false, leaving the length alone, if it is already at the minimum.
    pub fn decrement(&mut self, phase: Phase) -> bool {
        let length = self.length_mut(phase);
        if *length <= MIN_LENGTH {
            return false;
        }
        *length -= 1;
        true
    }

    fn length_mut(&mut self, phase: Phase) -> &mut u32 {
        match phase {
            Phase::Session => &mut self.session_length,
            Phase::Break => &mut self.break_length,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            session_length: DEFAULT_SESSION_LENGTH,
            break_length: DEFAULT_BREAK_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.session_length(), 25);
        assert_eq!(settings.break_length(), 5);
        assert_eq!(settings.duration(Phase::Session), Duration::seconds(1500));
        assert_eq!(settings.duration(Phase::Break), Duration::seconds(300));
    }

    #[test]
    fn test_new_validates_range() {
        assert!(Settings::new(1, 60).is_ok());
        assert!(matches!(
            Settings::new(0, 5),
            Err(ClockError::InvalidArgument(_))
        ));
        assert!(matches!(
            Settings::new(25, 61),
            Err(ClockError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_increment_stops_at_max() {
        let mut settings = Settings::new(59, 59).unwrap();

        assert!(settings.increment(Phase::Session));
        assert!(!settings.increment(Phase::Session));
        assert_eq!(settings.session_length(), 60);
        // The other phase is untouched
        assert_eq!(settings.break_length(), 59);
    }

    #[test]
    fn test_decrement_stops_at_min() {
        let mut settings = Settings::new(2, 2).unwrap();

        assert!(settings.decrement(Phase::Break));
        assert!(!settings.decrement(Phase::Break));
        assert_eq!(settings.break_length(), 1);
        assert_eq!(settings.session_length(), 2);
    }

    #[test]
    fn test_lengths_stay_in_range() {
        let mut settings = Settings::default();
        for phase in [Phase::Session, Phase::Break] {
            for _ in 0..100 {
                settings.increment(phase);
                assert!(settings.length(phase) <= MAX_LENGTH);
            }
            for _ in 0..100 {
                settings.decrement(phase);
                assert!(settings.length(phase) >= MIN_LENGTH);
            }
        }
    }
}
