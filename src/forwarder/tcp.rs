use super::{
    AttemptPhase, Destination, ForwardError, ForwardOutcome, ForwardPolicy, wire_payload,
};
use crate::port::{EventForwarder, ForwardObserver};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::{sleep, timeout};
use tracing::debug;

/// Opens a fresh TCP connection per attempt, writes `line + "\n"` and closes.
pub struct TcpForwarder {
    destination: Destination,
    policy: ForwardPolicy,
    observers: Vec<Arc<dyn ForwardObserver>>,
}

impl TcpForwarder {
    #[must_use]
    pub fn new(destination: Destination, policy: ForwardPolicy) -> Self {
        Self {
            destination,
            policy,
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn ForwardObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Deliver `line`, retrying up to `max_attempts` times.
    pub async fn forward_line(&self, line: &str) -> ForwardOutcome {
        if line.is_empty() {
            debug!("Skipping empty event");
            return ForwardOutcome::Skipped;
        }

        let payload = wire_payload(line);
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.attempt(payload.as_bytes()).await {
                Ok(bytes) => {
                    for observer in &self.observers {
                        observer.delivered(attempt, bytes);
                    }
                    return ForwardOutcome::Delivered {
                        attempts: attempt,
                        bytes,
                    };
                }
                Err(error) => {
                    for observer in &self.observers {
                        observer.attempt_failed(attempt, &error);
                    }
                    if attempt >= max_attempts {
                        for observer in &self.observers {
                            observer.exhausted(attempt, &error);
                        }
                        return ForwardOutcome::Exhausted {
                            attempts: attempt,
                            cause: error,
                        };
                    }
                }
            }

            sleep(self.policy.retry_delay).await;
            attempt += 1;
        }
    }

    /// One connect-send-close cycle. Returns the number of bytes written.
    async fn attempt(&self, payload: &[u8]) -> Result<usize, ForwardError> {
        let limit = self.policy.socket_timeout;
        let address = || self.destination.to_string();

        let connect = TcpStream::connect((self.destination.host.as_str(), self.destination.port));
        let mut stream = match timeout(limit, connect).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(source)) => {
                return Err(ForwardError::Connect {
                    address: address(),
                    source,
                });
            }
            Err(_) => {
                return Err(ForwardError::Timeout {
                    address: address(),
                    phase: AttemptPhase::Connect,
                    limit,
                });
            }
        };

        match timeout(limit, stream.write_all(payload)).await {
            Ok(Ok(())) => {}
            Ok(Err(source)) => {
                return Err(ForwardError::Write {
                    address: address(),
                    source,
                });
            }
            Err(_) => {
                return Err(ForwardError::Timeout {
                    address: address(),
                    phase: AttemptPhase::Write,
                    limit,
                });
            }
        }

        // The payload is already handed to the kernel; a failed FIN is not a failed delivery.
        if let Err(e) = stream.shutdown().await {
            debug!("Shutdown of connection to {} failed: {e}", self.destination);
        }

        Ok(payload.len())
    }
}

impl EventForwarder for TcpForwarder {
    fn forward<'a>(
        &'a self,
        line: &'a str,
    ) -> Pin<Box<dyn Future<Output = ForwardOutcome> + Send + 'a>> {
        Box::pin(self.forward_line(line))
    }
}
