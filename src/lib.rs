//! # Etiqueta - Lab Specimen Label Printing
//!
//! Etiqueta turns patient/lab-order records into thermal-printer labels:
//! one barcoded label per destination sample container, rendered in a
//! printer command language (EPL2 or ZPL II) and handed to the OS print
//! queue.
//!
//! ## Pipeline
//!
//! ```text
//! JSON payload → normalize → group → compose → epl/zpl render → dispatch
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use etiqueta::grouping::group;
//! use etiqueta::label::{compose, LayoutConfig};
//! use etiqueta::normalize::normalize;
//! use etiqueta::protocol::PrinterLanguage;
//! use serde_json::json;
//!
//! let payload = json!({
//!     "patient": {"name": "Jane Doe", "visit_number": "V100"},
//!     "id": "P1",
//!     "lab_requests": [
//!         {"name": "CBC", "main_test": {"container": {"id": 7}}}
//!     ]
//! });
//!
//! let (patient, requests) = normalize(&payload)?;
//! for container_group in group(&requests) {
//!     let doc = compose(&patient, &container_group, &LayoutConfig::default());
//!     let bytes = PrinterLanguage::Epl.render(&doc);
//!     // Send `bytes` to the spooler...
//!     assert!(bytes.starts_with(b"N\n"));
//! }
//! # Ok::<(), etiqueta::EtiquetaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`normalize`] | Alias-tolerant payload intake |
//! | [`grouping`] | Requests partitioned by container |
//! | [`label`] | Document model, chunker, composer |
//! | [`protocol`] | EPL2 / ZPL II renderers |
//! | [`printer`] | Hardware presets, name resolution |
//! | [`dispatch`] | Spooler boundary, fan-out submission |
//! | [`server`] | axum HTTP layer |
//! | [`error`] | Error types |

pub mod dispatch;
pub mod error;
pub mod grouping;
pub mod label;
pub mod model;
pub mod normalize;
pub mod printer;
pub mod protocol;
pub mod server;

// Re-exports for convenience
pub use error::EtiquetaError;
pub use printer::PrinterConfig;
pub use protocol::PrinterLanguage;
