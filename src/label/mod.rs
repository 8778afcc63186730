//! # Label Document Model
//!
//! The intermediate representation for one printed specimen label. A
//! [`LabelDocument`] is an ordered sequence of drawing [`Primitive`]s plus
//! the page attributes, sitting between the domain model and the printer
//! command languages:
//!
//! ```text
//! Patient + ContainerGroup → compose → LabelDocument → epl/zpl → Bytes
//! ```
//!
//! The document is language-neutral: only the primitive set and their order
//! are contractual. The literal command syntax belongs to the renderers in
//! [`crate::protocol`].
//!
//! Primitives are emitted bottom layer first (painter's algorithm), so the
//! bounding box always precedes text and barcode fields.

pub mod chunk;
pub mod compose;

pub use chunk::chunk;
pub use compose::{compose, LayoutConfig, LayoutOverrides};

use serde::Serialize;

/// Field rotation in quarter turns, clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[repr(u8)]
pub enum Rotation {
    #[default]
    None = 0,
    Cw90 = 1,
    Cw180 = 2,
    Cw270 = 3,
}

/// Barcode symbology, restricted to what the target printers support
/// natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Symbology {
    /// Code 128 auto mode. Default: compact and full ASCII.
    #[default]
    Code128,
    /// Code 39. Legacy scanners only.
    Code39,
}

/// One drawing directive. Coordinates are in printer dots from the top-left
/// corner of the label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Primitive {
    /// Printer-font text field.
    Text {
        x: u16,
        y: u16,
        rotation: Rotation,
        /// Printer font selector (1 = smallest).
        font: u8,
        h_mult: u8,
        w_mult: u8,
        content: String,
    },
    /// Native barcode field. The printer rasterizes the symbology itself.
    Barcode {
        x: u16,
        y: u16,
        rotation: Rotation,
        symbology: Symbology,
        /// Narrow element width in dots.
        narrow: u8,
        /// Wide element width in dots (ignored by Code 128).
        wide: u8,
        height: u16,
        /// Print the human-readable line under the bars.
        human_readable: bool,
        data: String,
    },
    /// Rectangular border.
    Box {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        thickness: u16,
    },
}

/// Global page attributes emitted ahead of the primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSetup {
    pub width_dots: u16,
    pub length_dots: u16,
    /// Burn darkness, printer-specific scale (EPL 0-15).
    pub darkness: u8,
    /// Print speed code (EPL 1-4).
    pub speed: u8,
}

/// A composed label, immutable once built. The unit handed to the
/// dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelDocument {
    pub page: PageSetup,
    pub primitives: Vec<Primitive>,
}
