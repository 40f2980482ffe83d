//! # Receipt API Entry Point
//!
//! ## Startup Sequence
//! 1. Load configuration from the environment
//! 2. Initialize tracing (logging)
//! 3. Create the in-memory receipt store
//! 4. Serve until a shutdown signal arrives

use receipt_api::{init_tracing, serve, ApiConfig, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::load()?;
    init_tracing(config.log_json);

    info!(
        host = %config.host,
        port = config.port,
        "Starting Receipt API server..."
    );

    serve(&config, AppState::in_memory()).await
}
