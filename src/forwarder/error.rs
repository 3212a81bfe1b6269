use std::fmt;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPhase {
    Connect,
    Write,
}

impl fmt::Display for AttemptPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => f.write_str("connect"),
            Self::Write => f.write_str("write"),
        }
    }
}

/// Why a single forward attempt failed.
#[derive(Error, Debug)]
pub enum ForwardError {
    #[error("Failed to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Timed out during {phase} to {address} after {limit:?}")]
    Timeout {
        address: String,
        phase: AttemptPhase,
        limit: Duration,
    },

    #[error("Failed to write to {address}: {source}")]
    Write {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

impl ForwardError {
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
