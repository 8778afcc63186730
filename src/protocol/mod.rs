//! # Printer Command Languages
//!
//! Renderers that turn a [`LabelDocument`](crate::label::LabelDocument)
//! into the on-wire text of a concrete printer language.
//!
//! ## Module Structure
//!
//! - [`epl`]: EPL2 (Eltron Programming Language)
//! - [`zpl`]: ZPL II (Zebra Programming Language)
//!
//! The document model owns the primitive set and ordering; the literal
//! command syntax lives entirely here. Adding a language means adding one
//! module with a `render` function.
//!
//! ## Usage Example
//!
//! ```
//! use etiqueta::label::{LabelDocument, PageSetup};
//! use etiqueta::protocol::PrinterLanguage;
//!
//! let doc = LabelDocument {
//!     page: PageSetup { width_dots: 448, length_dots: 406, darkness: 10, speed: 3 },
//!     primitives: vec![],
//! };
//! let bytes = PrinterLanguage::Epl.render(&doc);
//! assert!(bytes.starts_with(b"N\n"));
//! ```

pub mod epl;
pub mod zpl;

use serde::Deserialize;

use crate::label::LabelDocument;

/// Target printer command language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrinterLanguage {
    /// EPL2 — the default; matches the installed GK420d fleet.
    #[default]
    Epl,
    /// ZPL II.
    Zpl,
}

impl PrinterLanguage {
    /// Render a document to printer bytes in this language.
    pub fn render(&self, doc: &LabelDocument) -> Vec<u8> {
        match self {
            Self::Epl => epl::render(doc),
            Self::Zpl => zpl::render(doc),
        }
    }

    /// Parse a language name (CLI args or payload override).
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "epl" | "epl2" => Ok(Self::Epl),
            "zpl" | "zpl2" | "zplii" => Ok(Self::Zpl),
            other => Err(format!("Unknown printer language '{}'. Use 'epl' or 'zpl'", other)),
        }
    }
}

impl std::fmt::Display for PrinterLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Epl => write!(f, "epl"),
            Self::Zpl => write!(f, "zpl"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(PrinterLanguage::parse("EPL2").unwrap(), PrinterLanguage::Epl);
        assert_eq!(PrinterLanguage::parse("zpl").unwrap(), PrinterLanguage::Zpl);
        assert!(PrinterLanguage::parse("escpos").is_err());
    }
}
