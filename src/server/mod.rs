//! # HTTP Server for Label Printing
//!
//! Accepts patient/lab-order payloads and drives the composition pipeline.
//!
//! ## Usage
//!
//! ```bash
//! etiqueta serve --listen 0.0.0.0:8080
//! ```
//!
//! ## Endpoints
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `POST /api/labels/print` | Compose and dispatch labels for one order |
//! | `GET /api/printers` | Enumerated queues + resolved target |
//! | `GET /health` | Liveness probe |

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::dispatch::Spooler;
use crate::error::EtiquetaError;

/// Build the application router. Split from [`serve`] so tests can drive
/// the handlers with a mock spooler and no socket.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/labels/print", post(handlers::labels::print))
        .route("/api/printers", get(handlers::printers::list))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn serve(config: ServerConfig, spooler: Arc<dyn Spooler>) -> Result<(), EtiquetaError> {
    let listen_addr = config.listen_addr.clone();
    let state = Arc::new(AppState::new(config, spooler));

    tracing::info!(listen = %listen_addr, "etiqueta HTTP server starting");

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .map_err(|e| EtiquetaError::Transport(format!("Failed to bind to {}: {}", listen_addr, e)))?;

    axum::serve(listener, app(state))
        .await
        .map_err(|e| EtiquetaError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
