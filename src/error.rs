//! # Error Types
//!
//! This module defines error types used throughout the etiqueta library.

use thiserror::Error;

/// Main error type for etiqueta operations
#[derive(Debug, Error)]
pub enum EtiquetaError {
    /// Inbound payload is missing the request list or is otherwise
    /// structurally unusable
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Invalid CLI or configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Print spooler rejected or failed a submission
    #[error("Spooler error: {0}")]
    Spooler(String),

    /// Server/transport-level errors (bind, I/O)
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
