//! Server state and configuration.

use std::sync::Arc;

use crate::dispatch::Spooler;
use crate::label::LayoutConfig;
use crate::protocol::PrinterLanguage;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Printer command language rendered by default
    pub language: PrinterLanguage,
    /// Deployment-wide printer override (beats discovery for every request)
    pub printer_override: Option<String>,
    /// Queue name used when discovery finds nothing
    pub default_printer: String,
    /// Default page attributes
    pub layout: LayoutConfig,
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// OS print-queue boundary. Swapped for a mock in tests.
    pub spooler: Arc<dyn Spooler>,
}

impl AppState {
    pub fn new(config: ServerConfig, spooler: Arc<dyn Spooler>) -> Self {
        Self { config, spooler }
    }
}
