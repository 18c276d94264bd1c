//! Application logging functionality
//!
//! Installs the tracing subscriber, writing either to stderr or to a dated
//! file under ~/.config/strokefont/logs/

use crate::core::config_file::ConfigFile;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d");
    ConfigFile::logs_dir().join(format!("strokefont-{}.log", timestamp))
}

/// Default filter directive when `RUST_LOG` is not set
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "strokefont=debug,info"
    } else {
        "info"
    }
}

/// Install the global subscriber
///
/// Returns the file writer's guard when logging to a file; keep it alive
/// until exit so buffered lines get flushed.
pub fn init(verbose: bool, to_file: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    if to_file {
        let log_file_path = current_log_file();
        let logs_dir = ConfigFile::logs_dir();
        fs::create_dir_all(&logs_dir)?;
        let file_name = log_file_path
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("invalid log file path {:?}", log_file_path))?;

        let appender = tracing_appender::rolling::never(&logs_dir, file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
        tracing::info!(
            "=== strokefont started at {} ===",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );
        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(None)
    }
}
