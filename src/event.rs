//! Keyboard event handling.
//!
//! Key bindings:
//! - any printable key: insert into the input line
//! - `Enter`: convert the input
//! - `Tab`: toggle encode/decode
//! - `Ctrl+S`: move the result into the input and flip direction
//! - `Ctrl+F`: toggle spaced/compact output
//! - `Ctrl+T`: toggle the codon table panel
//! - `Ctrl+L`: clear the input
//! - `F1`: toggle help
//! - `Left`/`Right`/`Home`/`End`/`Backspace`/`Delete`: line editing
//! - `Esc` or `Ctrl+C`: quit

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::model::AppState;

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Quit the application
    Quit,
    /// Insert a character at the cursor
    Insert(char),
    /// Insert pasted text at the cursor
    Paste(String),
    /// Delete the character before the cursor
    Backspace,
    /// Delete the character under the cursor
    Delete,
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,
    /// Clear the input line
    Clear,
    /// Run the conversion
    Convert,
    /// Toggle encode/decode
    ToggleDirection,
    /// Result -> input, flip direction
    SwapResult,
    /// Toggle spaced/compact output
    ToggleFormat,
    /// Toggle the codon table panel
    ToggleTable,
    /// Toggle the help overlay
    ToggleHelp,
    /// Dismiss the help overlay
    DismissHelp,
}

/// Polls for keyboard events with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action.
pub fn handle_event(event: Event, show_help: bool) -> Action {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            handle_key_event(key_event, show_help)
        }
        Event::Paste(text) => Action::Paste(text),
        _ => Action::None,
    }
}

/// Handles a key event.
fn handle_key_event(key: KeyEvent, show_help: bool) -> Action {
    // If help is shown, any key dismisses it
    if show_help {
        return Action::DismissHelp;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('s') => Action::SwapResult,
            KeyCode::Char('f') => Action::ToggleFormat,
            KeyCode::Char('t') => Action::ToggleTable,
            KeyCode::Char('l') => Action::Clear,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Enter => Action::Convert,
        KeyCode::Tab => Action::ToggleDirection,
        KeyCode::F(1) => Action::ToggleHelp,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,
        KeyCode::Left => Action::MoveLeft,
        KeyCode::Right => Action::MoveRight,
        KeyCode::Home => Action::MoveHome,
        KeyCode::End => Action::MoveEnd,
        KeyCode::Char(c) => Action::Insert(c),
        _ => Action::None,
    }
}

/// Applies an action to the application state.
///
/// Returns `true` if the application should continue, `false` if it should quit.
pub fn apply_action(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::None => {}
        Action::Quit => {
            state.should_quit = true;
        }
        Action::Insert(c) => {
            state.input.insert(c);
            state.input_changed();
        }
        Action::Paste(text) => {
            // Line breaks and tabs separate codons; other control characters are dropped
            for c in text.chars() {
                if c.is_whitespace() {
                    state.input.insert(' ');
                } else if !c.is_control() {
                    state.input.insert(c);
                }
            }
            state.input_changed();
        }
        Action::Backspace => {
            state.input.backspace();
            state.input_changed();
        }
        Action::Delete => {
            state.input.delete();
            state.input_changed();
        }
        Action::MoveLeft => state.input.move_left(),
        Action::MoveRight => state.input.move_right(),
        Action::MoveHome => state.input.move_home(),
        Action::MoveEnd => state.input.move_end(),
        Action::Clear => {
            state.input.clear();
            state.input_changed();
        }
        Action::Convert => {
            state.convert();
        }
        Action::ToggleDirection => {
            state.toggle_direction();
        }
        Action::SwapResult => {
            state.swap_result_into_input();
        }
        Action::ToggleFormat => {
            state.toggle_format();
        }
        Action::ToggleTable => {
            state.toggle_table();
        }
        Action::ToggleHelp => {
            state.toggle_help();
        }
        Action::DismissHelp => {
            state.dismiss_help();
        }
    }

    !state.should_quit
}
