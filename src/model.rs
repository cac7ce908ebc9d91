//! Application state for the interactive converter.
//!
//! This module contains:
//! - The editable input line and its cursor
//! - The last conversion outcome (result or error)
//! - Application state (direction, output format, panels, quit flag)

use crate::codec::{CodecError, Direction, RnaFormat};

/// A single-line text buffer with a character cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    /// Cursor position, in characters (0..=len)
    cursor: usize,
}

impl InputLine {
    /// Creates an input line holding `text`, cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Inserts a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, c);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.text.remove(idx);
        }
    }

    /// Deletes the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let idx = self.byte_index(self.cursor);
            self.text.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// Outcome of the last conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Conversion succeeded
    Converted(String),
    /// Conversion failed; shown verbatim to the user
    Failed(CodecError),
}

/// The complete application state.
#[derive(Debug)]
pub struct AppState {
    /// Conversion direction
    pub direction: Direction,
    /// Format used when encoding
    pub format: RnaFormat,
    /// Text being edited
    pub input: InputLine,
    /// Last conversion outcome, cleared when the input changes
    pub outcome: Option<Outcome>,
    /// Whether the codon table panel is visible
    pub show_table: bool,
    /// Whether the help overlay is visible
    pub show_help: bool,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Status message to display
    pub status_message: Option<String>,
}

impl AppState {
    /// Creates a new state with an empty input.
    pub fn new(direction: Direction, format: RnaFormat) -> Self {
        Self {
            direction,
            format,
            input: InputLine::default(),
            outcome: None,
            show_table: false,
            show_help: false,
            should_quit: false,
            status_message: Some("Type a message, Enter to convert, F1 for help".to_string()),
        }
    }

    /// Runs the conversion on the current input.
    pub fn convert(&mut self) {
        let outcome = match self.direction.convert(self.input.as_str(), self.format) {
            Ok(result) => {
                self.status_message = Some(format!("{} ok", self.direction));
                Outcome::Converted(result)
            }
            Err(e) => {
                self.status_message = Some(format!("{} failed ({})", self.direction, e.kind()));
                Outcome::Failed(e)
            }
        };
        self.outcome = Some(outcome);
    }

    /// Switches between encoding and decoding, keeping the input.
    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggle();
        self.outcome = None;
        self.status_message = Some(format!("Mode: {}", self.direction));
    }

    /// Moves the last result into the input and flips the direction.
    pub fn swap_result_into_input(&mut self) {
        match self.outcome.take() {
            Some(Outcome::Converted(result)) => {
                self.input = InputLine::new(result);
                self.direction = self.direction.toggle();
                self.status_message = Some(format!("Result moved to input, mode: {}", self.direction));
            }
            other => {
                self.outcome = other;
                self.status_message = Some("Nothing to swap: convert first".to_string());
            }
        }
    }

    /// Switches between spaced and compact output, re-running a finished encode.
    pub fn toggle_format(&mut self) {
        self.format = self.format.toggle();
        if self.direction == Direction::Encode && matches!(self.outcome, Some(Outcome::Converted(_))) {
            self.convert();
        }
        self.status_message = Some(format!("Output format: {}", self.format));
    }

    pub fn toggle_table(&mut self) {
        self.show_table = !self.show_table;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn dismiss_help(&mut self) {
        self.show_help = false;
    }

    /// Called after any edit of the input.
    pub fn input_changed(&mut self) {
        self.outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_line_editing() {
        let mut line = InputLine::default();
        for c in "J3H".chars() {
            line.insert(c);
        }
        line.move_left();
        line.insert('8');
        assert_eq!(line.as_str(), "J38H");
        assert_eq!(line.cursor(), 3);

        line.backspace();
        assert_eq!(line.as_str(), "J3H");
        line.move_home();
        line.delete();
        assert_eq!(line.as_str(), "3H");
        line.move_end();
        line.move_right();
        assert_eq!(line.cursor(), 2);
    }

    #[test]
    fn test_input_line_multibyte() {
        let mut line = InputLine::new("a漢b");
        line.move_left();
        line.backspace();
        assert_eq!(line.as_str(), "ab");
        assert_eq!(line.cursor(), 1);
    }

    #[test]
    fn test_convert_and_swap() {
        let mut state = AppState::new(Direction::Encode, RnaFormat::Spaced);
        state.input = InputLine::new("J38H");
        state.convert();
        let encoded = match &state.outcome {
            Some(Outcome::Converted(s)) => s.clone(),
            other => panic!("unexpected outcome: {:?}", other),
        };

        state.swap_result_into_input();
        assert_eq!(state.direction, Direction::Decode);
        assert_eq!(state.input.as_str(), encoded);

        state.convert();
        assert_eq!(state.outcome, Some(Outcome::Converted("J38H".to_string())));
    }

    #[test]
    fn test_convert_failure_is_kept() {
        let mut state = AppState::new(Direction::Decode, RnaFormat::Spaced);
        state.input = InputLine::new("AUG XYZ UAA");
        state.convert();
        assert!(matches!(
            state.outcome,
            Some(Outcome::Failed(CodecError::InvalidBase { base: 'X', .. }))
        ));

        // A failed outcome cannot be swapped
        state.swap_result_into_input();
        assert_eq!(state.direction, Direction::Decode);
        assert!(state.outcome.is_some());
    }

    #[test]
    fn test_toggle_format_reencodes() {
        let mut state = AppState::new(Direction::Encode, RnaFormat::Spaced);
        state.input = InputLine::new("01");
        state.convert();
        state.toggle_format();
        assert_eq!(state.format, RnaFormat::Compact);
        assert_eq!(state.outcome, Some(Outcome::Converted("AUGAAAAACUAA".to_string())));
    }

    #[test]
    fn test_toggle_direction_clears_outcome() {
        let mut state = AppState::new(Direction::Encode, RnaFormat::Spaced);
        state.convert();
        assert!(state.outcome.is_some());
        state.toggle_direction();
        assert_eq!(state.direction, Direction::Decode);
        assert!(state.outcome.is_none());
    }
}
