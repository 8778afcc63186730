//! Printer enumeration handler.

use axum::{extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;

use crate::printer::{resolve_printer, ResolvePolicy};

use super::super::state::AppState;

/// Response for GET /api/printers.
#[derive(Debug, Serialize)]
pub struct PrintersResponse {
    /// Queue names enumerated by the OS.
    pub printers: Vec<String>,
    /// The queue a print request would target right now.
    pub resolved: String,
}

/// Handle GET /api/printers - list queues and the resolved target.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<PrintersResponse> {
    let printers = state.spooler.printer_names().await;
    let policy = ResolvePolicy {
        override_name: state.config.printer_override.clone(),
        default_name: state.config.default_printer.clone(),
    };
    let resolved = resolve_printer(&policy, &printers);

    Json(PrintersResponse { printers, resolved })
}
