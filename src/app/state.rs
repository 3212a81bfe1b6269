use crate::config::Config;
use crate::forwarder::{TcpForwarder, TracingObserver};
use crate::port::EventForwarder;
use crate::stats::RelayStats;
use std::sync::Arc;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<dyn EventForwarder>,
    pub stats: Arc<RelayStats>,
}

impl AppState {
    pub fn new(forwarder: Arc<dyn EventForwarder>, stats: Arc<RelayStats>) -> Self {
        Self { forwarder, stats }
    }

    /// Create `AppState` from configuration settings.
    ///
    /// The TCP forwarder reports to both the tracing observer and the stats
    /// counters.
    #[must_use]
    pub fn from_settings(settings: &Config) -> Self {
        let stats = Arc::new(RelayStats::new());
        let forwarder = TcpForwarder::new(settings.destination(), settings.forward_policy())
            .with_observer(Arc::new(TracingObserver))
            .with_observer(stats.clone());

        Self {
            forwarder: Arc::new(forwarder),
            stats,
        }
    }
}
