//! The audible cue played when a phase ends.
//!
//! The clock owns exactly one [`Alarm`]. It is played from the beginning on
//! every phase transition and stopped when the clock is reset.

mod bell;
mod command;

pub use bell::BellAlarm;
pub use command::CommandAlarm;

use std::io::Write;

use crate::config::{AlarmConfig, AlarmKind};

/// A playback handle for the alert sound.
#[cfg_attr(test, mockall::automock)]
pub trait Alarm {
    /// Play from the beginning at full volume, interrupting any playback
    /// already in progress.
    fn play(&mut self);

    /// Halt playback and rewind.
    fn stop(&mut self);
}

/// An alarm that makes no sound.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAlarm;

impl Alarm for SilentAlarm {
    fn play(&mut self) {}

    fn stop(&mut self) {}
}

/// The alarm a configuration asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlarmChoice {
    /// No sound.
    Silent,
    /// The terminal bell.
    Bell,
    /// A shell command.
    Command(String),
}

impl AlarmChoice {
    /// Pick the alarm for `config`.
    ///
    /// `mute` overrides the configured kind. A command alarm without a
    /// command falls back to the terminal bell.
    #[must_use]
    pub fn resolve(config: &AlarmConfig, mute: bool) -> Self {
        if mute {
            return Self::Silent;
        }

        match (config.kind, config.command.as_deref()) {
            (AlarmKind::Silent, _) => Self::Silent,
            (AlarmKind::Command, Some(command)) if !command.trim().is_empty() => {
                Self::Command(command.to_string())
            }
            (AlarmKind::Command, _) => {
                tracing::warn!("alarm kind is 'command' but no command is configured, using the bell");
                Self::Bell
            }
            (AlarmKind::Bell, _) => Self::Bell,
        }
    }

    /// Create the alarm. A bell rings on `bell_out`.
    #[must_use]
    pub fn build<W: Write + 'static>(self, bell_out: W) -> Box<dyn Alarm> {
        match self {
            Self::Silent => Box::new(SilentAlarm),
            Self::Bell => Box::new(BellAlarm::new(bell_out)),
            Self::Command(command) => Box::new(CommandAlarm::new(command)),
        }
    }
}

/// Build the alarm described by the configuration, ringing any bell on
/// `bell_out`.
#[must_use]
pub fn from_config<W: Write + 'static>(
    config: &AlarmConfig,
    mute: bool,
    bell_out: W,
) -> Box<dyn Alarm> {
    AlarmChoice::resolve(config, mute).build(bell_out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(kind: AlarmKind, command: Option<&str>) -> AlarmConfig {
        AlarmConfig {
            kind,
            command: command.map(str::to_string),
        }
    }

    #[test]
    fn test_silent_alarm() {
        let mut alarm = SilentAlarm;
        alarm.play();
        alarm.stop();
    }

    #[test]
    fn test_default_is_bell() {
        assert_eq!(AlarmChoice::resolve(&AlarmConfig::default(), false), AlarmChoice::Bell);
    }

    #[test]
    fn test_mute_overrides_kind() {
        for kind in [AlarmKind::Bell, AlarmKind::Command, AlarmKind::Silent] {
            let config = config(kind, Some("true"));
            assert_eq!(AlarmChoice::resolve(&config, true), AlarmChoice::Silent);
        }
    }

    #[test]
    fn test_command_kind() {
        let config = config(AlarmKind::Command, Some("paplay done.oga"));
        assert_eq!(
            AlarmChoice::resolve(&config, false),
            AlarmChoice::Command("paplay done.oga".to_string())
        );
    }

    #[test]
    fn test_command_kind_without_command_falls_back_to_bell() {
        assert_eq!(
            AlarmChoice::resolve(&config(AlarmKind::Command, None), false),
            AlarmChoice::Bell
        );
        assert_eq!(
            AlarmChoice::resolve(&config(AlarmKind::Command, Some("   ")), false),
            AlarmChoice::Bell
        );
    }

    #[test]
    fn test_silent_kind_ignores_command() {
        let config = config(AlarmKind::Silent, Some("true"));
        assert_eq!(AlarmChoice::resolve(&config, false), AlarmChoice::Silent);
    }

    #[test]
    fn test_build_every_choice() {
        for choice in [
            AlarmChoice::Silent,
            AlarmChoice::Bell,
            AlarmChoice::Command("true".to_string()),
        ] {
            let mut alarm = choice.build(std::io::sink());
            alarm.stop();
        }
    }
}
