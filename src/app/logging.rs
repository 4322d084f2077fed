//! Logging Setup
//!
//! Stdout logging filtered by `RUST_LOG` (falling back to the configured
//! level), plus an optional daily-rotated file in the data directory.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::app::config::FolioConfig;
use crate::helpers::{get_or_create_log_dir, is_development};

const LOG_FILE_PREFIX: &str = "folio-gui.log";

/// Filter from `RUST_LOG`, or `default_level` when unset or invalid
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
///
/// The returned guard flushes the log file when dropped and must live as
/// long as the application.
pub fn init(config: &FolioConfig) -> Option<WorkerGuard> {
    let console_layer = fmt::layer()
        .with_timer(LocalTime::rfc_3339())
        .with_ansi(is_development())
        .with_target(true);

    let (file_layer, guard) = if config.log_to_file {
        match get_or_create_log_dir() {
            Ok(dir) => {
                let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .with_timer(LocalTime::rfc_3339())
                    .with_ansi(false)
                    .with_writer(writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("Warning: log file disabled: {e}");
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    let result = tracing_subscriber::registry()
        .with(env_filter(&config.log_level))
        .with(console_layer)
        .with(file_layer)
        .try_init();
    if let Err(e) = result {
        eprintln!("Warning: logging already initialized: {e}");
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back() {
        // Must not panic on garbage directives
        let _ = env_filter("not a [valid directive");
        let _ = env_filter("debug");
    }
}
