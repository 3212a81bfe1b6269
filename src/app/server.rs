use crate::error::RelayError;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Bind the HTTP listener.
pub async fn bind(address: &str) -> Result<TcpListener, RelayError> {
    TcpListener::bind(address)
        .await
        .map_err(|e| RelayError::Bind {
            address: address.to_string(),
            source: e,
        })
}

/// Serve `app` until SIGINT/SIGTERM or until `shutdown_token` is cancelled.
///
/// In-flight batches run to completion before this returns.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown_token: CancellationToken,
) -> Result<(), RelayError> {
    info!("Relay listening on {}", listener.local_addr()?);
    info!("  - POST /*          (null-delimited event batches)");
    info!("  - GET  /v1/health  (health check)");
    info!("  - GET  /v1/stats   (relay counters)");

    let signal_token = shutdown_token.clone();
    tokio::spawn(async move {
        tokio::select! {
            name = termination_signal() => {
                info!("Received {name}, draining in-flight batches");
                signal_token.cancel();
            }
            () = signal_token.cancelled() => {}
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_token.cancelled_owned())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves with the name of the first termination signal received.
/// A signal whose handler cannot be installed is never reported.
async fn termination_signal() -> &'static str {
    let interrupt = async {
        match signal::ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(e) => {
                warn!("SIGINT handler unavailable: {e}");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                "SIGTERM"
            }
            Err(e) => {
                warn!("SIGTERM handler unavailable: {e}");
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    }
}
