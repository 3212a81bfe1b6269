use crate::forwarder::ForwardError;
use crate::port::ForwardObserver;
use tracing::{error, info, warn};

/// Reports forwarding progress through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ForwardObserver for TracingObserver {
    fn attempt_failed(&self, attempt: u32, error: &ForwardError) {
        warn!("Forward attempt {attempt} failed: {error}");
    }

    fn delivered(&self, _attempt: u32, bytes: usize) {
        info!("Forwarded event (len={bytes})");
    }

    fn exhausted(&self, attempts: u32, error: &ForwardError) {
        error!("Failed to forward event after {attempts} attempts: {error}");
    }
}
