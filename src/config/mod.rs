mod validation;

use crate::forwarder::{Destination, ForwardPolicy};
use crate::logging::LogSettings;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Argument error: {0}")]
    ArgError(#[from] clap::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Parser, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[command(author, version, about = "Relays null-delimited HTTP event batches to a TCP destination", long_about = None)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP listener binds to
    #[arg(long, env = "LISTEN_HOST", default_value = "0.0.0.0")]
    pub listen_host: String,

    /// HTTP listener port
    #[arg(long, env = "LISTEN_PORT", default_value = "7070")]
    pub listen_port: u16,

    /// Downstream TCP host
    #[arg(long, env = "DEST_HOST", default_value = "127.0.0.1")]
    pub dest_host: String,

    /// Downstream TCP port
    #[arg(long, env = "DEST_PORT", default_value = "7071")]
    pub dest_port: u16,

    /// Connect and write timeout for each forward attempt, in milliseconds
    #[arg(long, env = "SOCKET_TIMEOUT_MS", default_value = "10000")]
    pub socket_timeout_ms: u64,

    /// Forward attempts per event, including the first one
    #[arg(long, env = "FORWARD_RETRIES", default_value = "3")]
    pub forward_retries: u32,

    /// Pause between failed forward attempts, in milliseconds
    #[arg(long, env = "FORWARD_RETRY_DELAY_MS", default_value = "1000")]
    pub forward_retry_delay_ms: u64,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "MAX_BODY_BYTES", default_value = "10485760")]
    pub max_body_bytes: usize,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Log file path; stdout only when unset
    #[arg(long, env = "LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log file size that triggers rotation, in bytes
    #[arg(long, env = "LOG_MAX_BYTES", default_value = "10485760")]
    pub log_max_bytes: u64,

    /// Number of rotated log files to keep
    #[arg(long, env = "LOG_BACKUPS", default_value = "5")]
    pub log_backups: usize,

    /// Configuration file path (optional, TOML)
    #[serde(skip)]
    #[arg(long, env = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_host: "0.0.0.0".to_string(),
            listen_port: 7070,
            dest_host: "127.0.0.1".to_string(),
            dest_port: 7071,
            socket_timeout_ms: 10_000,
            forward_retries: 3,
            forward_retry_delay_ms: 1_000,
            max_body_bytes: 10 * 1024 * 1024,
            log_level: LogLevel::Info,
            log_file: None,
            log_max_bytes: 10 * 1024 * 1024,
            log_backups: 5,
            config_file: None,
        }
    }
}

impl Config {
    /// Parse CLI arguments (with env fallbacks), then load the TOML file if
    /// one was named. A config file replaces CLI and env values entirely.
    pub fn load<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::try_parse_from(args)?;
        if let Some(path) = config.config_file.clone() {
            return Self::from_file(path);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen_host, self.listen_port)
    }

    pub fn destination(&self) -> Destination {
        Destination::new(self.dest_host.clone(), self.dest_port)
    }

    pub fn forward_policy(&self) -> ForwardPolicy {
        ForwardPolicy {
            max_attempts: self.forward_retries,
            retry_delay: Duration::from_millis(self.forward_retry_delay_ms),
            socket_timeout: Duration::from_millis(self.socket_timeout_ms),
        }
    }

    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            level: self.log_level,
            file: self.log_file.clone(),
            max_bytes: self.log_max_bytes,
            backups: self.log_backups,
        }
    }
}
