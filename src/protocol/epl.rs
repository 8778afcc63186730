//! # EPL2 Command Builders
//!
//! Line-oriented command builders for EPL2 (Eltron Programming Language),
//! the native language of the Zebra LP/TLP/GK desktop printers.
//!
//! ## Command Summary
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `N` | Clear image buffer |
//! | `q` | Label width (dots) |
//! | `Q` | Label length + gap (dots) |
//! | `R` | Reference point (home position) |
//! | `D` | Density (darkness 0-15) |
//! | `S` | Speed (1-4) |
//! | `A` | Text field |
//! | `B` | Barcode field |
//! | `X` | Box/border |
//! | `P` | Print |
//!
//! Based on the "EPL2 Programming Guide" (Zebra part 14245L).

use crate::label::{LabelDocument, Primitive, Rotation, Symbology};

/// Inter-label gap sent with the `Q` command, in dots.
const LABEL_GAP_DOTS: u16 = 24;

/// EPL2 barcode type selector for the `B` command.
fn barcode_selector(symbology: Symbology) -> &'static str {
    match symbology {
        Symbology::Code128 => "1", // Code 128 auto (subsets A/B/C)
        Symbology::Code39 => "3",
    }
}

/// Escape a quoted EPL2 data field. Backslash escapes the quote and itself.
fn escape(data: &str) -> String {
    data.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Clear the image buffer. Must precede every label.
///
/// **Command:** `N`
pub fn clear_buffer() -> String {
    "N\n".to_string()
}

/// Set label width.
///
/// **Command:** `q<width>`
pub fn set_width(dots: u16) -> String {
    format!("q{}\n", dots)
}

/// Set label length and inter-label gap.
///
/// **Command:** `Q<length>,<gap>`
pub fn set_length(dots: u16) -> String {
    format!("Q{},{}\n", dots, LABEL_GAP_DOTS)
}

/// Set the reference point (home position) to the top-left corner.
///
/// **Command:** `R<x>,<y>`
pub fn home() -> String {
    "R0,0\n".to_string()
}

/// Set burn darkness.
///
/// **Command:** `D<density>` (0-15)
pub fn set_darkness(level: u8) -> String {
    format!("D{}\n", level.min(15))
}

/// Set print speed.
///
/// **Command:** `S<speed>` (1-4)
pub fn set_speed(code: u8) -> String {
    format!("S{}\n", code.clamp(1, 4))
}

/// Text field.
///
/// **Command:** `A<x>,<y>,<rot>,<font>,<wm>,<hm>,N,"<data>"`
///
/// `font` selects the printer's resident bitmap fonts 1-5; `hm`/`wm` are
/// integer size multipliers. The trailing `N` requests normal (not
/// reverse-video) rendering.
pub fn text(x: u16, y: u16, rotation: Rotation, font: u8, h_mult: u8, w_mult: u8, content: &str) -> String {
    format!(
        "A{},{},{},{},{},{},N,\"{}\"\n",
        x,
        y,
        rotation as u8,
        font.clamp(1, 5),
        w_mult,
        h_mult,
        escape(content)
    )
}

/// Barcode field.
///
/// **Command:** `B<x>,<y>,<rot>,<type>,<narrow>,<wide>,<height>,<B|N>,"<data>"`
///
/// `B` prints the human-readable line under the bars, `N` suppresses it.
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
    format!(
        "B{},{},{},{},{},{},{},{},\"{}\"\n",
        x,
        y,
        rotation as u8,
        barcode_selector(symbology),
        narrow,
        wide,
        height,
        if human_readable { "B" } else { "N" },
        escape(data)
    )
}

/// Box/border drawn between two corners.
///
/// **Command:** `X<x1>,<y1>,<thickness>,<x2>,<y2>`
pub fn draw_box(x: u16, y: u16, width: u16, height: u16, thickness: u16) -> String {
    format!(
        "X{},{},{},{},{}\n",
        x,
        y,
        thickness,
        x + width,
        y + height
    )
}

/// Print one label.
///
/// **Command:** `P<count>`
pub fn print(count: u16) -> String {
    format!("P{}\n", count)
}

/// Render a whole document to EPL2 bytes: page setup, primitives in
/// document order, one `P1`.
pub fn render(doc: &LabelDocument) -> Vec<u8> {
    let mut out = String::new();

    out.push_str(&clear_buffer());
    out.push_str(&set_width(doc.page.width_dots));
    out.push_str(&set_length(doc.page.length_dots));
    out.push_str(&home());
    out.push_str(&set_darkness(doc.page.darkness));
    out.push_str(&set_speed(doc.page.speed));

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

    out.push_str(&print(1));
    out.into_bytes()
}

// ============================================================================
// TESTS
// ============================================================================
