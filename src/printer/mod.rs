//! # Printer Module
//!
//! Printer-specific configuration and target-name resolution.
//!
//! ## Modules
//!
//! - [`config`]: Printer hardware presets
//! - [`resolve`]: Printer-name resolution chain

pub mod config;
pub mod resolve;

pub use config::PrinterConfig;
pub use resolve::{resolve_printer, ResolvePolicy};
