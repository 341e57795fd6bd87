//! Logging setup.
//!
//! The terminal belongs to the UI, so log records go to a file in the app
//! config directory through a non-blocking writer.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Log file name inside the app directory.
pub const LOG_FILE: &str = "action-deck.log";

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_filter`. Keep the returned guard alive until
/// exit so buffered records are flushed.
pub fn init(log_dir: &Path, default_filter: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let log_path = log_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(file);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .init();

    tracing::info!(log_path = %log_path.display(), "logging initialized");
    Ok(guard)
}
