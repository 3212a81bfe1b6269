use crate::forwarder::ForwardOutcome;
use std::future::Future;
use std::pin::Pin;

/// Delivers one normalized line to the downstream destination.
///
/// This trait is dyn-compatible by using boxed futures instead of `impl Future`.
/// Implementations absorb their own failures: the outcome is reported, never
/// propagated as an error.
pub trait EventForwarder: Send + Sync {
    fn forward<'a>(
        &'a self,
        line: &'a str,
    ) -> Pin<Box<dyn Future<Output = ForwardOutcome> + Send + 'a>>;
}
