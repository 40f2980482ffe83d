//! # Receipt API
//!
//! HTTP server that accepts receipts and scores them.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API                                     │
//! │                                                                         │
//! │  ┌────────────────────────────┐    ┌────────────────────────────────┐  │
//! │  │  handlers                  │    │  receipt-core                  │  │
//! │  │                            │    │                                │  │
//! │  │ • process_receipt ─────────┼───►│ • validate_receipt             │  │
//! │  │ • get_points ──────────────┼───►│ • points::breakdown            │  │
//! │  └─────────────┬──────────────┘    └────────────────────────────────┘  │
//! │                │                                                        │
//! │                ▼                                                        │
//! │  ┌────────────────────────────┐                                        │
//! │  │  AppState                  │                                        │
//! │  │  store: Arc<dyn            │                                        │
//! │  │         ReceiptStore>      │                                        │
//! │  └────────────────────────────┘                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `RECEIPT_API_HOST` - bind address (default: 127.0.0.1)
//! - `RECEIPT_API_PORT` - HTTP port (default: 8080)
//! - `RECEIPT_API_LOG_JSON` - JSON log output (default: false)
//! - `RUST_LOG` - log filter

pub mod config;
pub mod error;
pub mod handlers;
pub mod store;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use store::{InMemoryReceiptStore, ReceiptStore, StoreError};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        AppState { store }
    }

    /// State backed by a fresh [`InMemoryReceiptStore`].
    pub fn in_memory() -> Self {
        AppState::new(Arc::new(InMemoryReceiptStore::new()))
    }
}

/// Builds the router with both receipt endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/{id}/points", get(handlers::get_points))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl+C or SIGTERM.
pub async fn serve(config: &ApiConfig, state: AppState) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Receipt API listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (validation reasons, breakdowns)
/// - Default: `info,receipt_api=debug,tower_http=info`
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,receipt_api=debug,tower_http=info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(?e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
