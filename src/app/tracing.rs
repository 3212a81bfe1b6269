use crate::error::RelayError;
use crate::logging::{LogSettings, RotatingFileWriter};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber.
/// Uses JSON format on stdout when `RUST_LOG_FORMAT=json` (default for production).
/// When a log file is configured, a plain-text copy goes to a size-rotating file;
/// the returned guard must be held until exit so buffered lines get flushed.
pub fn init_tracing(settings: &LogSettings) -> Result<Option<WorkerGuard>, RelayError> {
    let use_json = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(true); // Default to JSON for production

    let level: Level = settings.level.into();
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let stdout_layer = if use_json {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .boxed()
    } else {
        fmt::layer().boxed()
    };

    let (file_layer, guard) = match &settings.file {
        Some(path) => {
            let writer = RotatingFileWriter::open(path, settings.max_bytes, settings.backups)
                .map_err(|e| {
                    RelayError::Logging(format!(
                        "Failed to open log file {}: {e}",
                        path.display()
                    ))
                })?;
            let (non_blocking, guard) = tracing_appender::non_blocking(writer);
            let layer = fmt::layer().with_ansi(false).with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .with(filter)
        .try_init()
        .map_err(|e| RelayError::Logging(e.to_string()))?;

    Ok(guard)
}
