//! Telemetry setup

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingSettings;
use crate::error::AppError;

/// Install the global subscriber.
///
/// `RUST_LOG` drives the filter (default `info`), `settings.format` picks
/// `json` or `pretty` output, and `settings.directory` adds a daily rolling
/// file next to stdout.
pub fn init_telemetry(settings: &LoggingSettings) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_appender = match &settings.directory {
        Some(dir) => Some(
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("foodexplorer")
                .filename_suffix("log")
                .build(dir)
                .map_err(|e| AppError::TelemetryError(e.to_string()))?,
        ),
        None => None,
    };

    let result = match settings.format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_target(true))
            .with(file_appender.map(|w| fmt::layer().json().with_writer(w)))
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty().with_target(true))
            .with(file_appender.map(|w| fmt::layer().with_writer(w).with_ansi(false)))
            .try_init(),
    };

    result.map_err(|e| AppError::TelemetryError(e.to_string()))
}
