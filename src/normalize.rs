//! # Record Normalizer
//!
//! Maps a loosely-shaped inbound order payload onto the canonical
//! [`Patient`]/[`LabRequest`] model.
//!
//! Historical callers disagree on field names and nesting: the request list
//! may sit at the top level or under `patient`, a test name may arrive as
//! `name` or `test_name`, a container id may be inline or buried under
//! `main_test.container`. Each logical field therefore resolves through an
//! ordered alias table — the first path that yields a present, non-null
//! value wins. The tables are plain data so they can be audited and tested
//! without touching the rest of the pipeline.
//!
//! Missing optional fields become `None`. A missing test name becomes
//! [`TEST_NAME_PLACEHOLDER`]. Only a payload without any recognizable
//! request list (or with a non-array in its place) is an error.

use serde_json::Value;

use crate::error::EtiquetaError;
use crate::model::{Container, LabRequest, Patient};

/// Printed when no alias yields a test name.
pub const TEST_NAME_PLACEHOLDER: &str = "Unknown Test";

// ============================================================================
// ALIAS TABLES
// ============================================================================
//
// Paths are tried top to bottom; each path is a key walk from the payload
// root (or from one request entry). Order encodes caller precedence and
// must not be reshuffled casually.

/// Where the lab request array may live.
const REQUEST_LIST_PATHS: &[&[&str]] = &[
    &["lab_requests"],
    &["patient", "lab_requests"],
    &["labRequests"],
    &["patient", "labRequests"],
    &["requests"],
];

const PATIENT_ID_PATHS: &[&[&str]] = &[
    &["id"],
    &["patient", "id"],
    &["patient_id"],
    &["patient", "patient_id"],
];

const PATIENT_NAME_PATHS: &[&[&str]] = &[
    &["patient", "name"],
    &["name"],
    &["patient", "full_name"],
];

const VISIT_NUMBER_PATHS: &[&[&str]] = &[
    &["patient", "visit_number"],
    &["patient", "visitNumber"],
    &["visit_number"],
    &["visitNumber"],
];

/// Per-request-entry paths.
const TEST_NAME_PATHS: &[&[&str]] = &[
    &["name"],
    &["test_name"],
    &["testName"],
    &["main_test", "name"],
];

const CONTAINER_ID_PATHS: &[&[&str]] = &[
    &["main_test", "container", "id"],
    &["container", "id"],
    &["main_test", "container_id"],
    &["container_id"],
];

const CONTAINER_NAME_PATHS: &[&[&str]] = &[
    &["main_test", "container", "name"],
    &["container", "name"],
    &["main_test", "container", "display_name"],
    &["container", "display_name"],
];

// ============================================================================
// RESOLUTION
// ============================================================================

/// Walk one key path. JSON `null` counts as absent.
fn lookup<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = root;
    for key in path {
        current = current.get(key)?;
    }
    if current.is_null() { None } else { Some(current) }
}

/// Try each alias path in order, returning the first hit.
fn resolve<'a>(root: &'a Value, paths: &[&[&str]]) -> Option<&'a Value> {
    paths.iter().find_map(|path| lookup(root, path))
}

/// Resolve to a display string. Identifiers arrive as strings from some
/// callers and bare numbers from others, so both are accepted.
fn resolve_string(root: &Value, paths: &[&[&str]]) -> Option<String> {
    match resolve(root, paths)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Normalize an inbound payload into a patient plus its lab requests.
///
/// Fails only on a structurally unusable payload (no request list, or a
/// non-array where the list should be). Everything else degrades to `None`
/// or a placeholder and normalization continues.
pub fn normalize(payload: &Value) -> Result<(Patient, Vec<LabRequest>), EtiquetaError> {
    let list = resolve(payload, REQUEST_LIST_PATHS).ok_or_else(|| {
        EtiquetaError::MalformedPayload("payload carries no lab request list".to_string())
    })?;

    let entries = list.as_array().ok_or_else(|| {
        EtiquetaError::MalformedPayload("lab request list is not an array".to_string())
    })?;

    let patient = Patient {
        id: resolve_string(payload, PATIENT_ID_PATHS),
        name: resolve_string(payload, PATIENT_NAME_PATHS),
        visit_number: resolve_string(payload, VISIT_NUMBER_PATHS),
    };

    let requests = entries.iter().map(normalize_request).collect();

    Ok((patient, requests))
}

/// Normalize one request entry. Never fails: an unresolvable container just
/// leaves `container` as `None`, which the grouper later drops.
fn normalize_request(entry: &Value) -> LabRequest {
    let test_name = resolve_string(entry, TEST_NAME_PATHS)
        .unwrap_or_else(|| TEST_NAME_PLACEHOLDER.to_string());

    let container = resolve_string(entry, CONTAINER_ID_PATHS).map(|id| Container {
        id,
        display_name: resolve_string(entry, CONTAINER_NAME_PATHS),
    });

    LabRequest {
        test_name,
        container,
    }
}

// ============================================================================
// TESTS
// ============================================================================
