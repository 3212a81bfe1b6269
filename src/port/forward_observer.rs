use crate::forwarder::ForwardError;

/// Receives per-attempt forwarding events.
///
/// Injected into the forwarder so that logging and counting stay out of the
/// retry loop and can be replaced in tests.
pub trait ForwardObserver: Send + Sync {
    /// One attempt failed. `attempt` is 1-based.
    fn attempt_failed(&self, attempt: u32, error: &ForwardError);

    /// The payload was written on attempt `attempt`.
    fn delivered(&self, attempt: u32, bytes: usize);

    /// Every attempt failed; `error` is the cause of the last one.
    fn exhausted(&self, attempts: u32, error: &ForwardError);
}
