//! File logging bootstrap.
//!
//! Logs never go to the terminal: the interactive viewer owns the screen.
//! When enabled, records are written to `rnacode-<hex>.log` in the chosen
//! directory (the system temp dir by default).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use log::info;

const LOG_FILE_PREFIX: &str = "rnacode";

/// Active file logger. Logging stops when this is dropped.
pub struct LogSession {
    _handle: LoggerHandle,
    path: PathBuf,
}

impl LogSession {
    /// Path of the log file being written.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Returns a fresh log file basename with a random suffix.
pub fn log_basename() -> String {
    format!("{}-{:08x}", LOG_FILE_PREFIX, rand::random::<u32>())
}

/// Starts file logging at `level` (e.g. `debug`, `info`, `rnacode=trace`) in `dir`.
pub fn init_file_logging(level: &str, dir: &Path) -> Result<LogSession> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory `{}`", dir.display()))?;

    let basename = log_basename();
    let spec = FileSpec::default()
        .directory(dir)
        .basename(basename.as_str())
        .suppress_timestamp();
    let path = spec.as_pathbuf(None);

    let handle = Logger::try_with_str(level)
        .with_context(|| format!("invalid log level `{}`", level))?
        .log_to_file(spec)
        .write_mode(WriteMode::BufferAndFlush)
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("failed to start logger")?;

    info!(
        "event=app_start version={} platform={}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );

    Ok(LogSession {
        _handle: handle,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_basename_shape() {
        let name = log_basename();
        assert!(name.starts_with("rnacode-"));
        assert_eq!(name.len(), "rnacode-".len() + 8);
        assert!(name["rnacode-".len()..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_log_file_lands_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let session = init_file_logging("debug", dir.path()).unwrap();
        assert_eq!(session.path().parent(), Some(dir.path()));
        assert_eq!(session.path().extension().and_then(|e| e.to_str()), Some("log"));
    }
}
