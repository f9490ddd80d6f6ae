//! Logging setup for the catalog generator.
//!
//! The generated document goes to stdout, so log output is kept on stderr.
//! Optionally, logs are also written to daily-rotated files in the
//! platform data directory.
//!
//! ## Usage
//!
//! ```no_run
//! use dsdoc::{config::LoggingConfig, logging};
//!
//! logging::init(&LoggingConfig::default()).expect("Failed to initialize logging");
//! tracing::info!("Catalog generation started");
//! ```

use crate::config::LoggingConfig;
use anyhow::{Context as _, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

/// Gets the log directory path based on platform conventions
///
/// Returns:
/// - Windows: `%APPDATA%/dsdoc/logs`
/// - macOS: `~/Library/Application Support/dsdoc/logs`
/// - Linux: `~/.local/share/dsdoc/logs`
pub fn get_log_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to determine data directory")?;

    let log_dir = base_dir.join("dsdoc").join("logs");

    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    }

    Ok(log_dir)
}

/// Filter built from `RUST_LOG`, falling back to the configured level.
fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .context("Failed to create env filter")
}

/// Initializes the logging system.
///
/// Installs a stderr layer and, when `log_to_file` is set, a file layer
/// writing `dsdoc.<date>.log` (daily rotation, ten files kept).
///
/// # Errors
///
/// Returns error if the filter is invalid or the log directory cannot be created.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter(config)?);

    let file_layer = if config.log_to_file {
        let log_dir = get_log_dir()?;
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .max_log_files(10)
            .filename_prefix("dsdoc")
            .filename_suffix("log")
            .build(&log_dir)
            .context("Failed to create log file appender")?;

        Some(
            fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .with_ansi(false)
                .with_writer(appender)
                .with_filter(env_filter(config)?),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!(level = %config.level, to_file = config.log_to_file, "Logging initialized");

    Ok(())
}
