//! # ZPL II Command Builders
//!
//! Command builders for ZPL II, the format language of current Zebra
//! printers. A label is a `^XA ... ^XZ` block; every field starts with a
//! `^FO` origin.
//!
//! ## Command Summary
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `^XA` / `^XZ` | Format start / end |
//! | `^PW` | Print width (dots) |
//! | `^LL` | Label length (dots) |
//! | `^LH` | Label home position |
//! | `~SD` | Darkness (0-30) |
//! | `^PR` | Print rate |
//! | `^FO` + `^A0` + `^FD` | Text field |
//! | `^BY` + `^BC`/`^B3` | Barcode field |
//! | `^GB` | Graphic box |
//!
//! Based on the "ZPL II Programming Guide" (Zebra part P1012728).

use crate::label::{LabelDocument, Primitive, Rotation, Symbology};

/// ZPL rotation letter for field orientation.
fn rotation_letter(rotation: Rotation) -> char {
    match rotation {
        Rotation::None => 'N',
        Rotation::Cw90 => 'R',
        Rotation::Cw180 => 'I',
        Rotation::Cw270 => 'B',
    }
}

/// Character height in dots for each EPL-style font selector. ZPL's
/// scalable font `0` takes explicit dimensions, so the document's font
/// code maps through this table.
fn font_height(font: u8) -> u16 {
    match font {
        1 => 18,
        2 => 28,
        3 => 38,
        4 => 46,
        _ => 56,
    }
}

/// Sanitize a `^FD` data field. `^` and `~` are command introducers and
/// cannot appear in field data without hex-escape mode.
fn escape(data: &str) -> String {
    data.replace(['^', '~'], " ")
}

/// Format start.
pub fn format_start() -> String {
    "^XA\n".to_string()
}

/// Format end. The printer prints the label on receipt.
pub fn format_end() -> String {
    "^XZ\n".to_string()
}

/// Page setup block: width, length, home, darkness, speed.
///
/// **Commands:** `^PW`, `^LL`, `^LH0,0`, `~SD`, `^PR`
pub fn page_setup(width: u16, length: u16, darkness: u8, speed: u8) -> String {
    format!(
        "^PW{}\n^LL{}\n^LH0,0\n~SD{:02}\n^PR{}\n",
        width,
        length,
        // EPL darkness runs 0-15, ~SD runs 0-30; double to match burn.
        u16::from(darkness.min(15)) * 2,
        speed.clamp(1, 6)
    )
}

/// Text field using the scalable font.
///
/// **Commands:** `^FO<x>,<y>^A0<rot>,<h>,<w>^FD<data>^FS`
pub fn text(x: u16, y: u16, rotation: Rotation, font: u8, h_mult: u8, w_mult: u8, content: &str) -> String {
    let base = font_height(font);
    let height = base * u16::from(h_mult.max(1));
    let width = (base / 2) * u16::from(w_mult.max(1));
    format!(
        "^FO{},{}^A0{},{},{}^FD{}^FS\n",
        x,
        y,
        rotation_letter(rotation),
        height,
        width,
        escape(content)
    )
}

/// Barcode field.
///
/// **Commands:** `^FO<x>,<y>^BY<narrow>,<ratio>,<height>` then
/// `^BC`/`^B3` `<rot>,<height>,<hri>,N,N^FD<data>^FS`
pub fn barcode(
    x: u16,
    y: u16,
    rotation: Rotation,
    symbology: Symbology,
    narrow: u8,
    wide: u8,
    height: u16,
    human_readable: bool,
    data: &str,
) -> String {
    // ^BY ratio is wide/narrow, valid 2.0-3.0; Code 128 ignores it.
    let ratio = (wide / narrow.max(1)).clamp(2, 3);
    let selector = match symbology {
        Symbology::Code128 => "BC",
        Symbology::Code39 => "B3",
    };
    let hri = if human_readable { 'Y' } else { 'N' };
    format!(
        "^FO{},{}^BY{},{},{}^{}{},{},{},N,N^FD{}^FS\n",
        x,
        y,
        narrow.max(1),
        ratio,
        height,
        selector,
        rotation_letter(rotation),
        height,
        hri,
        escape(data)
    )
}

/// Graphic box.
///
/// **Commands:** `^FO<x>,<y>^GB<w>,<h>,<thickness>^FS`
pub fn draw_box(x: u16, y: u16, width: u16, height: u16, thickness: u16) -> String {
    format!("^FO{},{}^GB{},{},{}^FS\n", x, y, width, height, thickness)
}

/// Render a whole document to ZPL II bytes.
pub fn render(doc: &LabelDocument) -> Vec<u8> {
    let mut out = String::new();

    out.push_str(&format_start());
    out.push_str(&page_setup(
        doc.page.width_dots,
        doc.page.length_dots,
        doc.page.darkness,
        doc.page.speed,
    ));

    for primitive in &doc.primitives {
        match primitive {
            Primitive::Text {
                x,
                y,
                rotation,
                font,
                h_mult,
                w_mult,
                content,
            } => out.push_str(&text(*x, *y, *rotation, *font, *h_mult, *w_mult, content)),
            Primitive::Barcode {
                x,
                y,
                rotation,
                symbology,
                narrow,
                wide,
                height,
                human_readable,
                data,
            } => out.push_str(&barcode(
                *x,
                *y,
                *rotation,
                *symbology,
                *narrow,
                *wide,
                *height,
                *human_readable,
                data,
            )),
            Primitive::Box {
                x,
                y,
                width,
                height,
                thickness,
            } => out.push_str(&draw_box(*x, *y, *width, *height, *thickness)),
        }
    }

    out.push_str(&format_end());
    out.into_bytes()
}

// ============================================================================
// TESTS
// ============================================================================
