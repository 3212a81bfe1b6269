#![warn(rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod forwarder;
pub mod handler;
pub mod healthcheck;
pub mod logging;
pub mod pipeline;
pub mod port;
pub mod stats;
#[doc(hidden)]
pub mod test_support;

pub use healthcheck::{healthcheck, healthcheck_with_port};
