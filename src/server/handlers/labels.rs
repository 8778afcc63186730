//! Label printing handler.
//!
//! One endpoint drives the whole pipeline: normalize the inbound order
//! payload, group requests by container, compose and render one label per
//! group, then fan the documents out to the spooler. The HTTP response
//! acknowledges composition and submission start — print completion is
//! asynchronous and observable only in the logs.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::dispatch::submit_all;
use crate::grouping::group;
use crate::label::{compose, LayoutOverrides};
use crate::normalize::normalize;
use crate::printer::{resolve_printer, ResolvePolicy};
use crate::protocol::PrinterLanguage;

use super::super::state::AppState;

/// Dispatch options riding along on the order payload. All optional; the
/// patient/order fields themselves are free-form and go through the
/// normalizer untouched.
#[derive(Debug, Default)]
pub struct PrintOptions {
    /// Per-request printer override.
    pub printer: Option<String>,
    /// Per-request language override.
    pub language: Option<PrinterLanguage>,
    /// Page attribute overrides, merged over the server's layout.
    pub layout: Option<LayoutOverrides>,
    /// Compose and count labels without touching the spooler.
    pub dry_run: bool,
}

impl PrintOptions {
    /// Extract options from the payload, each field independently. A bad
    /// value in one option must not silently discard the others — a caller
    /// sending `dry_run: true` alongside a bogus `language` gets an error,
    /// never a surprise physical print.
    fn from_payload(payload: &Value) -> Result<Self, String> {
        fn field<T: serde::de::DeserializeOwned>(
            payload: &Value,
            key: &str,
        ) -> Result<Option<T>, String> {
            match payload.get(key) {
                None | Some(Value::Null) => Ok(None),
                Some(value) => serde_json::from_value(value.clone())
                    .map(Some)
                    .map_err(|e| format!("invalid `{}` option: {}", key, e)),
            }
        }

        Ok(Self {
            printer: field(payload, "printer")?,
            language: field(payload, "language")?,
            layout: field(payload, "layout")?,
            dry_run: field(payload, "dry_run")?.unwrap_or(false),
        })
    }
}

/// Response for a print request.
#[derive(Debug, Serialize)]
pub struct PrintResponse {
    pub success: bool,
    /// Number of labels composed (one per container group).
    pub printed: usize,
    /// Container ids, in label order.
    pub containers: Vec<String>,
    /// Resolved target queue. Absent for no-ops and dry runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printer: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

fn error_response(status: StatusCode, error: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: error.to_string(),
        }),
    )
        .into_response()
}

/// Handle POST /api/labels/print.
pub async fn print(State(state): State<Arc<AppState>>, Json(payload): Json<Value>) -> Response {
    let options = match PrintOptions::from_payload(&payload) {
        Ok(options) => options,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e),
    };

    let (patient, requests) = match normalize(&payload) {
        Ok(normalized) => normalized,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    let groups = group(&requests);
    if groups.is_empty() {
        // No-op, not an error: nothing resolved a container.
        tracing::info!(
            patient = patient.id.as_deref().unwrap_or("unknown"),
            requests = requests.len(),
            "no requests with resolvable containers; nothing printed"
        );
        return Json(PrintResponse {
            success: true,
            printed: 0,
            containers: Vec::new(),
            printer: None,
            dry_run: options.dry_run,
        })
        .into_response();
    }

    let layout = options
        .layout
        .unwrap_or_default()
        .apply(state.config.layout);
    let language = options.language.unwrap_or(state.config.language);

    let containers: Vec<String> = groups.iter().map(|g| g.container.id.clone()).collect();
    let documents: Vec<Vec<u8>> = groups
        .iter()
        .map(|g| language.render(&compose(&patient, g, &layout)))
        .collect();

    if options.dry_run {
        return Json(PrintResponse {
            success: true,
            printed: documents.len(),
            containers,
            printer: None,
            dry_run: true,
        })
        .into_response();
    }

    let policy = ResolvePolicy {
        override_name: options
            .printer
            .or_else(|| state.config.printer_override.clone()),
        default_name: state.config.default_printer.clone(),
    };
    let available = state.spooler.printer_names().await;
    let printer = resolve_printer(&policy, &available);

    tracing::info!(
        patient = patient.id.as_deref().unwrap_or("unknown"),
        labels = documents.len(),
        printer = %printer,
        language = %language,
        "submitting labels"
    );

    // Fire-and-forget: handles are dropped, outcomes land in the logs.
    let _handles = submit_all(state.spooler.clone(), &printer, documents);

    Json(PrintResponse {
        success: true,
        printed: groups.len(),
        containers,
        printer: Some(printer),
        dry_run: false,
    })
    .into_response()
}
