pub mod rotating;

pub use rotating::RotatingFileWriter;

use crate::config::LogLevel;
use std::path::PathBuf;

/// Where and how much the relay logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LogLevel,
    /// Plain-text log file in addition to stdout.
    pub file: Option<PathBuf>,
    /// Size that triggers rotation of `file`.
    pub max_bytes: u64,
    /// Rotated files kept as `file.1 ..= file.N`.
    pub backups: usize,
}
