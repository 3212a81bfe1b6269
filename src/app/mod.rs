mod router;
pub mod server;
pub mod state;
pub mod tracing;

pub use router::main_router;

use crate::config::Config;
use crate::error::RelayError;
use tokio_util::sync::CancellationToken;

/// Application entry point. Initializes configuration, tracing, and starts the server.
pub async fn run() -> Result<(), RelayError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        let args = std::env::args()
            .enumerate()
            .filter(|(i, _)| *i != 1)
            .map(|(_, arg)| arg);
        match crate::healthcheck(args).await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("Healthcheck failed: {e}");
                std::process::exit(1)
            }
        }
    }

    let settings = match Config::load(std::env::args()) {
        Ok(settings) => settings,
        // --help and --version are reported through clap's error type
        Err(crate::config::ConfigError::ArgError(e)) => e.exit(),
        Err(e) => return Err(e.into()),
    };

    let _log_guard = tracing::init_tracing(&settings.log_settings())?;
    ::tracing::info!(
        "Starting HTTP event relay on {} -> {}",
        settings.listen_addr(),
        settings.destination()
    );

    let app_state = state::AppState::from_settings(&settings);
    let stats = app_state.stats.clone();
    let app = main_router(app_state, settings.max_body_bytes);

    let listener = server::bind(&settings.listen_addr()).await?;
    server::serve(listener, app, CancellationToken::new()).await?;

    ::tracing::info!(stats = ?stats.snapshot(), "Final relay counters");
    Ok(())
}
