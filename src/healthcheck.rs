//! Probe used by the `healthcheck` subcommand of the container image.

use crate::config::{Config, ConfigError};
use std::time::Duration;
use thiserror::Error;

const HEALTH_PATH: &str = "/v1/health";
const HEALTHY_BODY: &str = "Healthy";

#[derive(Error, Debug)]
pub enum HealthcheckError {
    #[error("Cannot resolve listen port: {0}")]
    Config(#[from] ConfigError),
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Health endpoint returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("Health endpoint returned unexpected body {0:?}")]
    Body(String),
}

/// Resolve the port to probe the same way the server resolves its own:
/// CLI flags with env fallbacks, or the config file when one is named.
pub fn probe_port<I, T>(args: I) -> Result<u16, HealthcheckError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Ok(Config::load(args)?.listen_port)
}

/// Probe the local relay. `args` is the process command line with the
/// `healthcheck` word already removed.
pub async fn healthcheck<I, T>(args: I) -> Result<(), HealthcheckError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let port = probe_port(args)?;
    healthcheck_with_port(port).await
}

/// Probe `GET /v1/health` on the given local port.
pub async fn healthcheck_with_port(port: u16) -> Result<(), HealthcheckError> {
    let url = format!("http://127.0.0.1:{port}{HEALTH_PATH}");
    let request_error = |source: reqwest::Error| HealthcheckError::Request {
        url: url.clone(),
        source,
    };

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .map_err(request_error)?;

    let resp = client.get(&url).send().await.map_err(request_error)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(HealthcheckError::Status(status));
    }

    let body = resp.text().await.map_err(request_error)?;
    if body.trim() != HEALTHY_BODY {
        return Err(HealthcheckError::Body(body));
    }
    Ok(())
}
