use rask_relay::app;
use rask_relay::error::RelayError;

#[tokio::main]
async fn main() -> Result<(), RelayError> {
    app::run().await
}
