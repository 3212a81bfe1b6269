pub mod event_forwarder;
pub mod forward_observer;

pub use event_forwarder::EventForwarder;
pub use forward_observer::ForwardObserver;
