//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::clock::{Command, Phase};
use crate::error::ClockError;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Show key bindings.
    Help,
    /// Send a command to the clock.
    Clock(Command),
}

/// Map a key press to an action.
#[must_use]
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::Help,

        KeyCode::Char(' ') | KeyCode::Enter => Action::Clock(Command::StartStop),
        KeyCode::Char('r') => Action::Clock(Command::Reset),

        // Session length - vim style
        KeyCode::Char('k') | KeyCode::Up => Action::Clock(Command::Increment(Phase::Session)),
        KeyCode::Char('j') | KeyCode::Down => Action::Clock(Command::Decrement(Phase::Session)),

        // Break length
        KeyCode::Char('l' | '+') | KeyCode::Right => {
            Action::Clock(Command::Increment(Phase::Break))
        }
        KeyCode::Char('h' | '-') | KeyCode::Left => {
            Action::Clock(Command::Decrement(Phase::Break))
        }

        _ => return None,
    };

    Some(action)
}

/// Wait up to `timeout` for a terminal event.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn next_action(timeout: Duration) -> Result<Option<Action>, ClockError> {
    if !event::poll(timeout)
        .map_err(|e| ClockError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    match event::read().map_err(|e| ClockError::Terminal(format!("Event read failed: {e}")))? {
        // Ignore key releases on terminals that report them
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(action_for_key(key)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for_key(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            action_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_clock_keys() {
        assert_eq!(
            action_for_key(key(KeyCode::Char(' '))),
            Some(Action::Clock(Command::StartStop))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Enter)),
            Some(Action::Clock(Command::StartStop))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('r'))),
            Some(Action::Clock(Command::Reset))
        );
    }

    #[test]
    fn test_length_keys() {
        assert_eq!(
            action_for_key(key(KeyCode::Up)),
            Some(Action::Clock(Command::Increment(Phase::Session)))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('j'))),
            Some(Action::Clock(Command::Decrement(Phase::Session)))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('+'))),
            Some(Action::Clock(Command::Increment(Phase::Break)))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Left)),
            Some(Action::Clock(Command::Decrement(Phase::Break)))
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(action_for_key(key(KeyCode::Char('z'))), None);
        assert_eq!(action_for_key(key(KeyCode::Tab)), None);
        // Plain 'c' is not Ctrl+C
        assert_eq!(action_for_key(key(KeyCode::Char('c'))), None);
    }
}
