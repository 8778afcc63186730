//! # Domain Model
//!
//! Canonical patient/order types produced by the normalizer and consumed by
//! the grouper and composer. All of these are request-scoped: built once per
//! inbound payload, never mutated, discarded after the labels are dispatched.

use serde::Serialize;

/// A patient as it appears on a specimen label.
///
/// Only the identifiers that end up printed are kept; everything else in the
/// inbound payload is ignored by the normalizer.
#[derive(Debug, Clone, Serialize)]
pub struct Patient {
    /// Opaque patient identifier. Preferred barcode payload.
    pub id: Option<String>,
    /// Display name. Not printed today, but callers rely on it in responses.
    pub name: Option<String>,
    /// Visit/encounter number. Label header, and barcode fallback.
    pub visit_number: Option<String>,
}

/// One ordered lab test request.
#[derive(Debug, Clone, Serialize)]
pub struct LabRequest {
    /// Test display name. The normalizer substitutes a placeholder when the
    /// payload carries none, so this is always present.
    pub test_name: String,
    /// Destination container, when one could be resolved.
    pub container: Option<Container>,
}

/// A physical sample-collection vessel.
///
/// Identity is the `id` alone: two values with equal ids are the same
/// container for grouping, whatever their display names say.
#[derive(Debug, Clone, Serialize)]
pub struct Container {
    pub id: String,
    /// Vessel name for the label footer (e.g. "Lavender Tube").
    pub display_name: Option<String>,
}

/// All tests bound for one container. Derived per request, one label each.
#[derive(Debug, Clone, Serialize)]
pub struct ContainerGroup {
    pub container: Container,
    /// Test names in original request order. Duplicates are preserved.
    pub test_names: Vec<String>,
}
