pub mod batch;
pub mod normalize;

pub use batch::{Batch, BatchError, EVENT_DELIMITER, split_events};
pub use normalize::normalize_event;
