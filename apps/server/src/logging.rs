//! Tracing subscriber setup.
//!
//! Console output is always on (plain or JSON). File output is optional and
//! rotated by `tracing-appender`. `RUST_LOG` takes precedence over
//! `logging.level`.

use crate::config::LoggingConfig;
use anyhow::Context;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Keeps the non-blocking file writer alive. Drop flushes pending lines.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<LoggingGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log level '{}'", config.level))?;

    let console = if config.json {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    };

    let (file_layer, file_guard) = if config.file_enabled {
        std::fs::create_dir_all(&config.file_directory).with_context(|| {
            format!("Failed to create log directory {}", config.file_directory)
        })?;
        let appender = match config.file_rotation.as_str() {
            "hourly" => rolling::hourly(&config.file_directory, &config.file_prefix),
            "minutely" => rolling::minutely(&config.file_directory, &config.file_prefix),
            "never" => rolling::never(&config.file_directory, &config.file_prefix),
            _ => rolling::daily(&config.file_directory, &config.file_prefix),
        };
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(writer)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}
