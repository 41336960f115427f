//! Terminal User Interface (TUI) for pomoclock.
//!
//! Shows the clock full-screen and maps key presses to clock commands.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;
pub use event::{action_for_key, Action};

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::alarm;
use crate::clock::Clock;
use crate::config::Config;
use crate::error::ClockError;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: &Config, mute: bool) -> Result<(), ClockError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| ClockError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode().ok();
        return Err(ClockError::Terminal(format!("Failed to setup terminal: {e}")));
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            disable_raw_mode().ok();
            execute!(io::stdout(), LeaveAlternateScreen).ok();
            return Err(ClockError::Terminal(format!("Failed to create terminal: {e}")));
        }
    };

    // Create app state and run main loop
    let clock = Clock::new(alarm::from_config(&config.alarm, mute, io::stdout()));
    let mut app = App::new(clock, &config.display);
    tracing::info!("tui started");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    tracing::info!("tui stopped");

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), ClockError> {
    while !app.should_quit {
        app.on_tick(Instant::now());

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| ClockError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        match event::next_action(app.poll_timeout(Instant::now()))? {
            Some(Action::Quit) => app.should_quit = true,
            Some(Action::Help) => app.show_help(),
            Some(Action::Clock(command)) => app.handle_command(command, Instant::now()),
            None => {}
        }
    }

    Ok(())
}
