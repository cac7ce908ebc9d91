//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - Input line with cursor
//! - Result panel with colored bases and emphasized start/stop codons
//! - Optional codon table panel
//! - Status bar with mode and format info
//! - Help overlay

use ratatui::{
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::codec::Direction;
use crate::codon_table::{CodonTable, CODON_LEN};
use crate::model::{AppState, Outcome};

/// Height of the input panel (one line plus borders).
const INPUT_HEIGHT: u16 = 3;
/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;
/// Width of one `symbol codon` cell in the table panel.
const TABLE_CELL_WIDTH: usize = 8;

/// Color scheme for bases.
pub trait ColorScheme {
    fn get_color(&self, c: char) -> Color;
}

/// RNA base color scheme.
pub struct RnaColorScheme;

impl ColorScheme for RnaColorScheme {
    fn get_color(&self, c: char) -> Color {
        match c {
            'A' => Color::Red,
            'C' => Color::Green,
            'G' => Color::Yellow,
            'U' => Color::Blue,
            _ => Color::DarkGray,
        }
    }
}

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let mut constraints = vec![Constraint::Length(INPUT_HEIGHT), Constraint::Min(3)];
    if state.show_table {
        constraints.push(Constraint::Length(table_height(area.width)));
    }
    constraints.push(Constraint::Length(STATUS_BAR_HEIGHT));

    let layout = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints(constraints)
        .split(area);

    render_input_panel(frame, state, layout[0]);
    render_result_panel(frame, state, layout[1]);
    if state.show_table {
        render_table_panel(frame, CodonTable::global(), layout[2]);
    }
    render_status_bar(frame, state, layout[layout.len() - 1]);

    if state.show_help {
        render_help(frame, area);
    }
}

/// Renders the input line, scrolled so the cursor stays visible.
fn render_input_panel(frame: &mut Frame, state: &AppState, area: Rect) {
    let chars: Vec<char> = state.input.as_str().chars().collect();
    let cursor = state.input.cursor();

    let before: String = chars[..cursor].iter().collect();
    let (under, after): (String, String) = match chars.get(cursor) {
        Some(c) => (c.to_string(), chars[cursor + 1..].iter().collect()),
        None => (" ".to_string(), String::new()),
    };

    let line = Line::from(vec![
        Span::raw(before),
        Span::styled(under, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ]);

    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = input_scroll(cursor_column(state.input.as_str(), cursor), inner_width);

    let title = match state.direction {
        Direction::Encode => "Message (0-9, A-Z, a-z)",
        Direction::Decode => "RNA sequence (AUG ... UAA)",
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    let paragraph = Paragraph::new(line).block(block).scroll((0, scroll));
    frame.render_widget(paragraph, area);
}

/// Display column of the character at `cursor` (wide characters count twice).
pub fn cursor_column(text: &str, cursor: usize) -> usize {
    let before: String = text.chars().take(cursor).collect();
    Span::raw(before).width()
}

/// Horizontal scroll offset that keeps the cursor column inside `width` columns.
pub fn input_scroll(cursor_col: usize, width: usize) -> u16 {
    if width == 0 {
        return 0;
    }
    cursor_col.saturating_sub(width - 1).min(u16::MAX as usize) as u16
}

/// Renders the last conversion result or error.
fn render_result_panel(frame: &mut Frame, state: &AppState, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;

    let (title, lines) = match &state.outcome {
        None => ("Result", vec![Line::from(Span::styled(
            "Press Enter to convert",
            Style::default().fg(Color::DarkGray),
        ))]),
        Some(Outcome::Failed(e)) => (
            "Error",
            wrap_lines(&e.to_string(), width)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Red))))
                .collect(),
        ),
        Some(Outcome::Converted(text)) => match state.direction {
            Direction::Encode => ("Result (RNA)", sequence_lines(text, width)),
            Direction::Decode => (
                "Result (message)",
                wrap_lines(text, width).into_iter().map(Line::from).collect(),
            ),
        },
    };

    let block = Block::default().borders(Borders::ALL).title(title);
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Wraps text to `width` columns, breaking long words.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|l| l.into_owned())
        .collect()
}

/// Colors an encoded sequence base by base, emphasizing the frame codons.
fn sequence_lines(sequence: &str, width: usize) -> Vec<Line<'static>> {
    let scheme = RnaColorScheme;
    let total_bases = sequence.chars().filter(|c| !c.is_whitespace()).count();
    let mut base_index = 0;

    wrap_lines(sequence, width)
        .into_iter()
        .map(|line| {
            let spans: Vec<Span> = line
                .chars()
                .map(|c| {
                    if c.is_whitespace() {
                        return Span::raw(c.to_string());
                    }
                    let is_marker =
                        base_index < CODON_LEN || base_index + CODON_LEN >= total_bases;
                    base_index += 1;

                    let style = Style::default().fg(Color::Black).bg(scheme.get_color(c));
                    let style = if is_marker {
                        style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                    } else {
                        style
                    };
                    Span::styled(c.to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Rows needed to show all 62 entries at the given terminal width.
pub fn table_height(terminal_width: u16) -> u16 {
    let cols = table_columns(terminal_width.saturating_sub(2) as usize);
    let rows = 62usize.div_ceil(cols);
    rows as u16 + 2
}

fn table_columns(inner_width: usize) -> usize {
    (inner_width / TABLE_CELL_WIDTH).max(1)
}

/// Renders the symbol -> codon table in a grid.
fn render_table_panel(frame: &mut Frame, table: &CodonTable, area: Rect) {
    let scheme = RnaColorScheme;
    let cols = table_columns(area.width.saturating_sub(2) as usize);
    let entries: Vec<_> = table.entries().collect();

    let lines: Vec<Line> = entries
        .chunks(cols)
        .map(|row| {
            let mut spans = Vec::new();
            for (symbol, codon) in row {
                spans.push(Span::styled(
                    format!("{} ", symbol),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                for base in codon.bases() {
                    let c = base.as_char();
                    spans.push(Span::styled(c.to_string(), Style::default().fg(scheme.get_color(c))));
                }
                spans.push(Span::raw("   "));
            }
            Line::from(spans)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Codon table (start AUG, stop UAA)");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the status bar at the bottom.
fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let message = state.status_message.as_deref().unwrap_or("");
    let left_content = format!(" {} | {} ", state.direction, message);
    let right_content = format!("Format: {} | F1 help ", state.format);

    let left_len = left_content.chars().count();
    let right_len = right_content.chars().count();
    let status_line = Line::from(vec![
        Span::styled(left_content, Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::styled(
            " ".repeat((area.width as usize).saturating_sub(left_len + right_len)),
            Style::default().bg(Color::Cyan),
        ),
        Span::styled(
            right_content,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(status_line), area);
}

const HELP_TEXT: &[(&str, &str)] = &[
    ("Enter", "Convert input"),
    ("Tab", "Switch encode / decode"),
    ("Ctrl+S", "Move result to input and switch"),
    ("Ctrl+F", "Spaced / compact RNA output"),
    ("Ctrl+T", "Show / hide codon table"),
    ("Ctrl+L", "Clear input"),
    ("F1", "Show / hide this help"),
    ("Esc, Ctrl+C", "Quit"),
];

/// Renders the help overlay centered on `area`.
fn render_help(frame: &mut Frame, area: Rect) {
    let height = HELP_TEXT.len() as u16 + 4;
    let popup = centered_rect(48, height, area);

    let mut lines: Vec<Line> = HELP_TEXT
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!(" {:<12}", key), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(*what),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default().borders(Borders::ALL).title("Help");
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rna_colors() {
        let scheme = RnaColorScheme;
        assert_eq!(scheme.get_color('A'), Color::Red);
        assert_eq!(scheme.get_color('C'), Color::Green);
        assert_eq!(scheme.get_color('G'), Color::Yellow);
        assert_eq!(scheme.get_color('U'), Color::Blue);
        assert_eq!(scheme.get_color('T'), Color::DarkGray);
        assert_eq!(scheme.get_color('a'), Color::DarkGray);
    }

    #[test]
    fn test_input_scroll() {
        assert_eq!(input_scroll(5, 10), 0);
        assert_eq!(input_scroll(9, 10), 0);
        assert_eq!(input_scroll(10, 10), 1);
        assert_eq!(input_scroll(25, 10), 16);
        assert_eq!(input_scroll(3, 0), 0);
    }

    #[test]
    fn test_cursor_column_counts_wide_chars() {
        assert_eq!(cursor_column("J38H", 4), 4);
        assert_eq!(cursor_column("漢漢漢", 3), 6);
        assert_eq!(cursor_column("a漢b", 2), 3);

        // Six wide chars fill 12 columns; cursor after them must scroll in a 10-column box
        let text = "漢".repeat(6);
        assert_eq!(input_scroll(cursor_column(&text, 6), 10), 3);
        assert_eq!(input_scroll(6, 10), 0);
    }

    #[test]
    fn test_wrap_spaced_sequence_on_codons() {
        let lines = wrap_lines("AUG AAA AAC AAG UAA", 8);
        assert_eq!(lines, vec!["AUG AAA", "AAC AAG", "UAA"]);
    }

    #[test]
    fn test_wrap_compact_sequence_breaks_words() {
        let lines = wrap_lines("AUGAAAAACUAA", 5);
        assert_eq!(lines, vec!["AUGAA", "AAAAC", "UAA"]);
    }

    #[test]
    fn test_sequence_lines_mark_frame() {
        let lines = sequence_lines("AUG AAA UAA", 80);
        assert_eq!(lines.len(), 1);
        let spans = &lines[0].spans;
        // 9 bases + 2 spaces
        assert_eq!(spans.len(), 11);
        assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(!spans[4].style.add_modifier.contains(Modifier::BOLD));
        assert!(spans[10].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_table_height() {
        // 80 columns: 78 inner / 8 = 9 columns, 62 / 9 -> 7 rows, + 2 borders
        assert_eq!(table_height(80), 9);
        assert_eq!(table_height(0), 64);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered_rect(48, 12, area);
        assert_eq!(r, Rect::new(26, 14, 48, 12));

        let small = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect(48, 12, small), small);
    }
}
