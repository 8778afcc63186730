//! # Printer Configuration
//!
//! Hardware presets for supported thermal label printers.
//!
//! ## Supported Printers
//!
//! | Model | Resolution | Label (dots) | Language |
//! |-------|------------|--------------|----------|
//! | Zebra GK420d | 203 DPI | 448 x 406 | EPL2 / ZPL II |

/// Hardware characteristics of a thermal label printer and its loaded
/// label stock.
///
/// - **page_width_dots / page_length_dots**: printable label area
/// - **darkness**: burn darkness on the printer's own scale
/// - **speed**: print speed code
#[derive(Debug, Clone, Copy)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: &'static str,

    /// Resolution in dots per inch
    pub dpi: u16,

    /// Label width in dots
    pub page_width_dots: u16,

    /// Label length in dots
    pub page_length_dots: u16,

    /// Burn darkness (EPL scale 0-15)
    pub darkness: u8,

    /// Print speed code (EPL scale 1-4)
    pub speed: u8,
}

impl PrinterConfig {
    /// # Zebra GK420d Configuration
    ///
    /// 203 DPI direct-thermal desktop printer loaded with 2.2" x 2"
    /// specimen labels.
    ///
    /// | Property | Value |
    /// |----------|-------|
    /// | Label width | 2.2" (448 dots) |
    /// | Label length | 2" (406 dots) |
    /// | Resolution | 203 DPI |
    /// | Languages | EPL2, ZPL II |
    pub const GK420D: Self = Self {
        name: "Zebra GK420d",
        dpi: 203,
        page_width_dots: 448,
        page_length_dots: 406,
        darkness: 10,
        speed: 3,
    };
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::GK420D
    }
}

// ============================================================================
// TESTS
// ============================================================================
