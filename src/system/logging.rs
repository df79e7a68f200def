//! Logging system initialization
//!
//! Sets up the tracing subscriber from the `[logging]` section of the
//! configuration.

use std::path::Path;

use tracing_appender::rolling;

use crate::config::{LogFormat, LoggingConfig};

/// Initialize logging system based on configuration
///
/// Must be called once, after the configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   so buffered log lines are flushed on exit
pub fn init_logging(
    config: &LoggingConfig,
) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_file = config.file.as_deref().filter(|f| !f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = match log_file {
        Some(log_file) if config.enable_rotation => {
            let path = Path::new(log_file);
            let dir = path.parent().unwrap_or(Path::new("."));
            let filename = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or("bookmarker.log");
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(filename.trim_end_matches(".log"))
                .filename_suffix("log")
                .max_log_files(config.max_backups as usize)
                .build(dir)?;
            Box::new(appender)
        }
        Some(log_file) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;
            Box::new(file)
        }
        None => Box::new(std::io::stdout()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none());

    match config.format {
        LogFormat::Json => subscriber_builder.json().try_init(),
        LogFormat::Text => subscriber_builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::debug!(
        "Logging initialized (level: {}, format: {})",
        config.level,
        config.format.as_ref()
    );

    Ok(guard)
}
