//! Alarm that runs a user-configured shell command.
//!
//! The command is expected to play a sound (for example
//! `paplay /usr/share/sounds/freedesktop/stereo/complete.oga`). Restarting
//! playback means killing the previous process and spawning a new one.

use std::process::{Child, Command, Stdio};

use super::Alarm;

/// Plays the alert by spawning `sh -c <command>`.
#[derive(Debug)]
pub struct CommandAlarm {
    command: String,
    child: Option<Child>,
}

impl CommandAlarm {
    /// Create an alarm for the given shell command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            child: None,
        }
    }

    /// The configured shell command.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Whether a playback process is still alive.
    pub fn is_playing(&mut self) -> bool {
        match self.child.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }

    fn halt(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Ok(None) = child.try_wait() {
                if let Err(e) = child.kill() {
                    tracing::warn!("failed to stop alarm command: {e}");
                }
            }
            // Reap so no zombie is left behind
            let _ = child.wait();
        }
    }
}

impl Alarm for CommandAlarm {
    fn play(&mut self) {
        self.halt();

        match Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => {
                tracing::debug!(pid = child.id(), "alarm command started");
                self.child = Some(child);
            }
            Err(e) => tracing::warn!("failed to run alarm command '{}': {e}", self.command),
        }
    }

    fn stop(&mut self) {
        self.halt();
    }
}

impl Drop for CommandAlarm {
    fn drop(&mut self) {
        self.halt();
    }
}
