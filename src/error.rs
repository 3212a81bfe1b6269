use thiserror::Error;

use crate::config::ConfigError;

/// Startup and serving failures of the relay process.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Invalid relay configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to set up logging: {0}")]
    Logging(String),

    #[error("Failed to bind HTTP listener on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server failed: {0}")]
    Server(#[from] std::io::Error),
}
