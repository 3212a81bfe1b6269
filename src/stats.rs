// Lock-free relay statistics.
//
// Shared by every request task; all updates are relaxed atomic increments.

use crate::forwarder::ForwardError;
use crate::port::ForwardObserver;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RelayStats {
    batches_accepted: AtomicU64,
    batches_rejected: AtomicU64,
    events_received: AtomicU64,
    events_skipped: AtomicU64,
    events_delivered: AtomicU64,
    events_exhausted: AtomicU64,
    forward_attempts: AtomicU64,
    failed_attempts: AtomicU64,
    timeout_attempts: AtomicU64,
    bytes_forwarded: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayStatsSnapshot {
    pub batches_accepted: u64,
    pub batches_rejected: u64,
    pub events_received: u64,
    pub events_skipped: u64,
    pub events_delivered: u64,
    pub events_exhausted: u64,
    pub forward_attempts: u64,
    pub failed_attempts: u64,
    pub timeout_attempts: u64,
    pub bytes_forwarded: u64,
}

impl RelayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_batch_accepted(&self) {
        self.batches_accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_batch_rejected(&self) {
        self.batches_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_event_received(&self) {
        self.events_received.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_event_skipped(&self) {
        self.events_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> RelayStatsSnapshot {
        RelayStatsSnapshot {
            batches_accepted: self.batches_accepted.load(Ordering::Relaxed),
            batches_rejected: self.batches_rejected.load(Ordering::Relaxed),
            events_received: self.events_received.load(Ordering::Relaxed),
            events_skipped: self.events_skipped.load(Ordering::Relaxed),
            events_delivered: self.events_delivered.load(Ordering::Relaxed),
            events_exhausted: self.events_exhausted.load(Ordering::Relaxed),
            forward_attempts: self.forward_attempts.load(Ordering::Relaxed),
            failed_attempts: self.failed_attempts.load(Ordering::Relaxed),
            timeout_attempts: self.timeout_attempts.load(Ordering::Relaxed),
            bytes_forwarded: self.bytes_forwarded.load(Ordering::Relaxed),
        }
    }
}

impl ForwardObserver for RelayStats {
    fn attempt_failed(&self, _attempt: u32, error: &ForwardError) {
        self.forward_attempts.fetch_add(1, Ordering::Relaxed);
        self.failed_attempts.fetch_add(1, Ordering::Relaxed);
        if error.is_timeout() {
            self.timeout_attempts.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn delivered(&self, _attempt: u32, bytes: usize) {
        self.forward_attempts.fetch_add(1, Ordering::Relaxed);
        self.events_delivered.fetch_add(1, Ordering::Relaxed);
        self.bytes_forwarded
            .fetch_add(bytes as u64, Ordering::Relaxed);
    }

    fn exhausted(&self, _attempts: u32, _error: &ForwardError) {
        self.events_exhausted.fetch_add(1, Ordering::Relaxed);
    }
}
