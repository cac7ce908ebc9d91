//! Application controller.
//!
//! This module orchestrates the main application loop:
//! - Terminal initialization and cleanup
//! - Event polling and handling
//! - State updates and rendering

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::event::{apply_action, handle_event, poll_event};
use crate::model::AppState;
use crate::ui::render;

/// The main application controller.
pub struct App {
    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state
    state: AppState,
    /// Event poll timeout
    tick_rate: Duration,
}

impl App {
    /// Creates a new application with the given state.
    pub fn new(state: AppState) -> Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let terminal = leave_raw_mode_on_err(Self::setup_terminal)?;

        Ok(Self {
            terminal,
            state,
            tick_rate: Duration::from_millis(50),
        })
    }

    /// Switches to the alternate screen. Raw mode must already be enabled.
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        Ok(Terminal::new(backend)?)
    }

    /// Runs the main application loop.
    pub fn run(&mut self) -> Result<()> {
        info!("event=tui_start direction={} format={}", self.state.direction, self.state.format);

        loop {
            self.terminal.draw(|frame| {
                render(frame, &self.state);
            })?;

            if let Some(event) = poll_event(self.tick_rate) {
                let action = handle_event(event, self.state.show_help);
                if !apply_action(&mut self.state, action) {
                    break;
                }
            }
        }

        info!("event=tui_quit");
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Runs `setup`, switching raw mode back off if it fails.
fn leave_raw_mode_on_err<T>(setup: impl FnOnce() -> Result<T>) -> Result<T> {
    setup().inspect_err(|_| {
        let _ = disable_raw_mode();
    })
}

/// Convenience function to run the interactive converter.
pub fn run_app(state: AppState) -> Result<()> {
    let mut app = App::new(state)?;
    app.run()
}
