//! rnacode - encode text as mRNA codons and back.
//!
//! ## Usage
//!
//! ```bash
//! rnacode J38H                      # encode
//! rnacode -d "AUG ... UAA"          # decode
//! rnacode -f compact -i msg.txt     # encode a file as one base string
//! echo J38H | rnacode -             # read stdin
//! rnacode --table                   # print the codon table
//! rnacode                           # interactive mode
//! ```

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use rnacode::cli::{read_input, render_table, run_cli_mode, write_output, CliOptions};
use rnacode::codec::{Direction, RnaFormat};
use rnacode::codon_table::CodonTable;
use rnacode::controller::run_app;
use rnacode::logging::init_file_logging;
use rnacode::model::AppState;

/// RNA output format for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Codons separated by spaces (AUG AAA UAA)
    Spaced,
    /// One concatenated base string (AUGAAAUAA)
    Compact,
}

impl From<FormatArg> for RnaFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Spaced => RnaFormat::Spaced,
            FormatArg::Compact => RnaFormat::Compact,
        }
    }
}

/// rnacode - encode text as framed mRNA codons and decode it back
///
/// With an input (argument, -i file, or "-" for stdin) the result is written to
/// stdout or -o/--output. Without one, an interactive converter opens.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to encode, or RNA sequence to decode with -d. "-" reads stdin
    input: Option<String>,

    /// Decode an RNA sequence instead of encoding text
    #[arg(short = 'd', long = "decode")]
    decode: bool,

    /// RNA output format (decoding accepts both)
    #[arg(short = 'f', long = "format", value_enum, default_value = "spaced")]
    format: FormatArg,

    /// Read the input from a file
    #[arg(short = 'i', long = "input-file")]
    input_file: Option<PathBuf>,

    /// Output file. Use "-" for stdout
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: String,

    /// Print the symbol to codon table and exit
    #[arg(long = "table")]
    table: bool,

    /// Write a log file at this level (error, warn, info, debug, trace)
    #[arg(long = "log-level", env = "RNACODE_LOG")]
    log_level: Option<String>,

    /// Directory for the log file (default: system temp dir)
    #[arg(long = "log-dir")]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _log_session = match &args.log_level {
        Some(level) => {
            let dir = args.log_dir.clone().unwrap_or_else(std::env::temp_dir);
            let session = init_file_logging(level, &dir)?;
            eprintln!("Logging to {}", session.path().display());
            Some(session)
        }
        None => None,
    };

    if args.table {
        return write_output(&args.output, &render_table(CodonTable::global()));
    }

    let direction = if args.decode {
        Direction::Decode
    } else {
        Direction::Encode
    };
    let format: RnaFormat = args.format.into();

    match read_input(args.input.as_deref(), args.input_file.as_deref())? {
        Some(input) => {
            let options = CliOptions {
                direction,
                format,
                output: args.output,
            };
            run_cli_mode(&input, &options)?;
        }
        None => {
            if args.output != "-" {
                anyhow::bail!("--output requires an input (argument, -i/--input-file or \"-\")");
            }
            run_app(AppState::new(direction, format))?;
        }
    }

    Ok(())
}
