//! Non-interactive mode: convert one input and write the result.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::codec::{Direction, RnaFormat};
use crate::codon_table::CodonTable;

/// Settings for a single CLI conversion.
#[derive(Debug, Clone)]
pub struct CliOptions {
    pub direction: Direction,
    pub format: RnaFormat,
    /// Output path, or "-" for stdout
    pub output: String,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            direction: Direction::Encode,
            format: RnaFormat::Spaced,
            output: "-".to_string(),
        }
    }
}

/// Resolves the text to convert.
///
/// A file takes precedence over the positional argument; a positional `-`
/// reads stdin. Returns `None` when no input was given at all.
pub fn read_input(positional: Option<&str>, input_file: Option<&Path>) -> Result<Option<String>> {
    let raw = if let Some(path) = input_file {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?
    } else {
        match positional {
            Some("-") => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read stdin")?;
                buf
            }
            Some(text) => text.to_string(),
            None => return Ok(None),
        }
    };
    Ok(Some(strip_line_ending(&raw).to_string()))
}

/// Removes one trailing `\n` or `\r\n`.
fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

/// Converts `input` and writes the result to the configured output.
pub fn run_cli_mode(input: &str, options: &CliOptions) -> Result<()> {
    let result = options.direction.convert(input, options.format)?;
    info!(
        "event=cli_convert direction={} input_chars={} output_chars={}",
        options.direction,
        input.chars().count(),
        result.chars().count()
    );
    write_output(&options.output, &result)
}

/// Renders the symbol table, one `symbol codon` pair per line.
pub fn render_table(table: &CodonTable) -> String {
    let mut out = String::new();
    for (symbol, codon) in table.entries() {
        out.push_str(&format!("{}\t{}\n", symbol, codon));
    }
    out
}

/// Writes `content` plus a newline to a file, or stdout for "-".
pub fn write_output(output: &str, content: &str) -> Result<()> {
    if output == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", content.trim_end_matches('\n'))?;
    } else {
        let mut file = File::create(output)
            .with_context(|| format!("Failed to create output file {}", output))?;
        writeln!(file, "{}", content.trim_end_matches('\n'))?;
        eprintln!("Wrote result to {}", output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("J38H\n"), "J38H");
        assert_eq!(strip_line_ending("J38H\r\n"), "J38H");
        assert_eq!(strip_line_ending("J38H"), "J38H");
        assert_eq!(strip_line_ending("J38H\n\n"), "J38H\n");
    }

    #[test]
    fn test_read_input_positional() {
        assert_eq!(read_input(Some("abc"), None).unwrap().as_deref(), Some("abc"));
        assert_eq!(read_input(None, None).unwrap(), None);
    }

    #[test]
    fn test_read_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "AUG AAA UAA").unwrap();

        let text = read_input(Some("ignored"), Some(file.path())).unwrap();
        assert_eq!(text.as_deref(), Some("AUG AAA UAA"));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(read_input(None, Some(&missing)).is_err());
    }

    #[test]
    fn test_run_cli_mode_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.rna");
        let options = CliOptions {
            output: out.to_string_lossy().into_owned(),
            ..CliOptions::default()
        };

        run_cli_mode("J38H", &options).unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written.trim_end().split(' ').count(), 6);

        let decode = CliOptions {
            direction: Direction::Decode,
            output: out.to_string_lossy().into_owned(),
            ..CliOptions::default()
        };
        run_cli_mode(written.trim_end(), &decode).unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "J38H\n");
    }

    #[test]
    fn test_run_cli_mode_reports_codec_error() {
        let err = run_cli_mode("Hello@World", &CliOptions::default()).unwrap_err();
        assert!(err.to_string().contains("'@'"));
    }

    #[test]
    fn test_render_table() {
        let table = render_table(&CodonTable::new());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 62);
        assert_eq!(lines[0], "0\tAAA");
        assert_eq!(lines[61], "z\tUUU");
    }
}
