//! Logging init: append to a file under the XDG state dir, or fall back to stderr.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,retrier=debug,retrier_core=debug";

/// Hands out clones of the log file handle; a failed clone degrades that
/// event's output to stderr instead of dropping it.
struct LogFile(File);

enum LogSink {
    File(File),
    Stderr(io::Stderr),
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr(s) => s.flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(f) => LogSink::File(f),
            Err(_) => LogSink::Stderr(io::stderr()),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Path of the log file: `~/.local/state/retrier/retrier.log`.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("retrier")?;
    xdg_dirs
        .place_state_file("retrier.log")
        .context("create log directory")
}

/// Initialize structured logging to the state-dir log file.
/// Returns Err (without installing a subscriber) if the file cannot be opened,
/// so the caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(LogFile(file))
        .with_ansi(false)
        .init();

    tracing::info!("retrier logging initialized at {}", path.display());
    Ok(path)
}

/// Initialize logging to stderr only.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
