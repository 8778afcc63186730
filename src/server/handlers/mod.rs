//! HTTP handlers for the server.

pub mod labels;
pub mod printers;

use axum::response::Json;
use serde_json::{json, Value};

/// Handle GET /health - liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}
