//! Shared test support utilities
//!
//! Provides a scripted `MockForwarder` and a `RecordingObserver` for use in
//! unit and integration tests.

use crate::forwarder::{ForwardError, ForwardOutcome};
use crate::port::{EventForwarder, ForwardObserver};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;

/// Mock forwarder that records every line it is asked to forward.
///
/// Lines whose (0-based) call index is in the failure set report
/// `Exhausted`; an empty line reports `Skipped`; everything else is
/// `Delivered` on the first attempt.
pub struct MockForwarder {
    forwarded: Mutex<Vec<String>>,
    failing_calls: HashSet<usize>,
    panic_on: Option<String>,
}

impl MockForwarder {
    pub fn new() -> Self {
        Self {
            forwarded: Mutex::new(Vec::new()),
            failing_calls: HashSet::new(),
            panic_on: None,
        }
    }

    /// Make the given call indexes exhaust their retries.
    pub fn failing_on(calls: impl IntoIterator<Item = usize>) -> Self {
        Self {
            failing_calls: calls.into_iter().collect(),
            ..Self::new()
        }
    }

    /// Panic when asked to forward `line`.
    pub fn panicking_on(line: impl Into<String>) -> Self {
        Self {
            panic_on: Some(line.into()),
            ..Self::new()
        }
    }

    pub fn forwarded(&self) -> Vec<String> {
        self.forwarded.lock().clone()
    }
}

impl Default for MockForwarder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventForwarder for MockForwarder {
    fn forward<'a>(
        &'a self,
        line: &'a str,
    ) -> Pin<Box<dyn Future<Output = ForwardOutcome> + Send + 'a>> {
        Box::pin(async move {
            if self.panic_on.as_deref() == Some(line) {
                panic!("mock forwarder asked to panic on {line:?}");
            }
            let call = {
                let mut forwarded = self.forwarded.lock();
                forwarded.push(line.to_string());
                forwarded.len() - 1
            };
            if line.is_empty() {
                return ForwardOutcome::Skipped;
            }
            if self.failing_calls.contains(&call) {
                return ForwardOutcome::Exhausted {
                    attempts: 3,
                    cause: ForwardError::Connect {
                        address: "mock:0".to_string(),
                        source: std::io::Error::from(std::io::ErrorKind::ConnectionRefused),
                    },
                };
            }
            ForwardOutcome::Delivered {
                attempts: 1,
                bytes: line.len() + 1,
            }
        })
    }
}

/// What a `RecordingObserver` saw, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservedEvent {
    AttemptFailed { attempt: u32, timeout: bool },
    Delivered { attempt: u32, bytes: usize },
    Exhausted { attempts: u32 },
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ObservedEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events.lock().clone()
    }

    pub fn failed_attempts(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| matches!(e, ObservedEvent::AttemptFailed { .. }))
            .count()
    }
}

impl ForwardObserver for RecordingObserver {
    fn attempt_failed(&self, attempt: u32, error: &ForwardError) {
        self.events.lock().push(ObservedEvent::AttemptFailed {
            attempt,
            timeout: error.is_timeout(),
        });
    }

    fn delivered(&self, attempt: u32, bytes: usize) {
        self.events
            .lock()
            .push(ObservedEvent::Delivered { attempt, bytes });
    }

    fn exhausted(&self, attempts: u32, _error: &ForwardError) {
        self.events.lock().push(ObservedEvent::Exhausted { attempts });
    }
}
