//! Per-event TCP forwarding with a bounded, fixed-delay retry.

pub mod error;
pub mod tcp;
pub mod tracing_observer;

pub use error::{AttemptPhase, ForwardError};
pub use tcp::TcpForwarder;
pub use tracing_observer::TracingObserver;

use std::fmt;
use std::time::Duration;

/// Where normalized events are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub host: String,
    pub port: u16,
}

impl Destination {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Retry and timeout settings for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardPolicy {
    /// Total attempts including the first one.
    pub max_attempts: u32,
    /// Fixed pause between a failed attempt and the next one.
    pub retry_delay: Duration,
    /// Applied separately to connect and to write.
    pub socket_timeout: Duration,
}

impl Default for ForwardPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: Duration::from_secs(1),
            socket_timeout: Duration::from_secs(10),
        }
    }
}

/// Terminal state of one event.
#[derive(Debug)]
pub enum ForwardOutcome {
    Delivered { attempts: u32, bytes: usize },
    Exhausted { attempts: u32, cause: ForwardError },
    /// Empty line; no connection was opened.
    Skipped,
}

impl ForwardOutcome {
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }

    /// Number of connection attempts made (0 when skipped).
    #[must_use]
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Delivered { attempts, .. } | Self::Exhausted { attempts, .. } => *attempts,
            Self::Skipped => 0,
        }
    }
}

/// Bytes written on the wire for `line`.
pub fn wire_payload(line: &str) -> String {
    let mut payload = String::with_capacity(line.len() + 1);
    payload.push_str(line);
    payload.push('\n');
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_payload_appends_single_newline() {
        assert_eq!(wire_payload("foo"), "foo\n");
        assert_eq!(wire_payload("ünï"), "ünï\n");
    }

    #[test]
    fn test_default_policy() {
        let policy = ForwardPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.retry_delay, Duration::from_secs(1));
        assert_eq!(policy.socket_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_destination_display() {
        assert_eq!(Destination::new("127.0.0.1", 7071).to_string(), "127.0.0.1:7071");
    }

    #[test]
    fn test_outcome_attempts() {
        assert_eq!(ForwardOutcome::Skipped.attempts(), 0);
        let delivered = ForwardOutcome::Delivered {
            attempts: 2,
            bytes: 4,
        };
        assert!(delivered.is_delivered());
        assert_eq!(delivered.attempts(), 2);
    }
}
