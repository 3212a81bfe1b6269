use crate::domain::{Batch, normalize_event};
use crate::forwarder::ForwardOutcome;
use crate::port::EventForwarder;
use crate::stats::RelayStats;
use std::sync::Arc;
use tracing::debug;

/// Per-batch tally, used for logging only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub events: usize,
    pub delivered: usize,
    pub exhausted: usize,
    pub skipped: usize,
}

/// Normalize and forward every event of `batch`, one after another, in order.
///
/// Per-event failures are counted, never returned: the batch always runs to
/// the end.
pub async fn relay_batch(
    forwarder: Arc<dyn EventForwarder>,
    stats: Arc<RelayStats>,
    batch: Batch,
) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for event in batch.events() {
        summary.events += 1;
        stats.record_event_received();

        let line = normalize_event(event);
        match forwarder.forward(&line).await {
            ForwardOutcome::Delivered { .. } => summary.delivered += 1,
            ForwardOutcome::Exhausted { .. } => summary.exhausted += 1,
            ForwardOutcome::Skipped => {
                debug!("Skipped empty event after normalization");
                stats.record_event_skipped();
                summary.skipped += 1;
            }
        }
    }

    summary
}
