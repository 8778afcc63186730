//! # Label Composer
//!
//! Lays out one specimen label for one container group. The layout is a
//! fixed coordinate preset — only the vertical extent of the test-name
//! block depends on content (one line per chunk).
//!
//! Paint order, top of label downward:
//!
//! 1. Page setup (width, length, darkness, speed) from [`LayoutConfig`]
//! 2. Bounding box at the page margins (bottom layer, emitted first)
//! 3. Visit number in the large font (`"N/A"` when absent)
//! 4. Code 128 barcode: patient id, else visit number, else `"0"`,
//!    human-readable line shown
//! 5. Test names joined with `" - "`, chunked to fixed-width lines,
//!    one text field per non-blank line
//! 6. Container display name, when present
//!
//! Composition never fails: every field has a literal fallback.

use serde::Deserialize;

use super::{chunk, LabelDocument, PageSetup, Primitive, Rotation, Symbology};
use crate::model::{ContainerGroup, Patient};
use crate::printer::PrinterConfig;

/// Separator between test names on the label body.
const TEST_NAME_SEPARATOR: &str = " - ";

/// Header text when the visit number is absent.
const VISIT_FALLBACK: &str = "N/A";

/// Barcode payload when both patient id and visit number are absent.
const BARCODE_FALLBACK: &str = "0";

// Coordinate preset, in dots at 203 DPI on 2.2" x 2" stock.
const MARGIN: u16 = 8;
const BOX_THICKNESS: u16 = 2;
const FIELD_X: u16 = 24;
const VISIT_Y: u16 = 24;
const VISIT_FONT: u8 = 4;
const BARCODE_Y: u16 = 84;
const BARCODE_HEIGHT: u16 = 70;
const BARCODE_NARROW: u8 = 2;
const BARCODE_WIDE: u8 = 4;
const TESTS_TOP_Y: u16 = 196;
const TEST_LINE_STEP: u16 = 26;
const TEST_LINE_WIDTH: usize = 26;
const TEST_FONT: u8 = 2;
const CONTAINER_NAME_GAP: u16 = 12;

/// Page attributes for one label run. Each field can be overridden
/// independently; unset fields fall back to the default printer preset.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    pub page_width_dots: u16,
    pub page_length_dots: u16,
    pub darkness: u8,
    pub speed: u8,
}

/// Partial page-attribute override, merged over a base [`LayoutConfig`].
/// Omitted fields keep the base value, so a caller adjusting one knob does
/// not revert the deployment's other settings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct LayoutOverrides {
    pub page_width_dots: Option<u16>,
    pub page_length_dots: Option<u16>,
    pub darkness: Option<u8>,
    pub speed: Option<u8>,
}

impl LayoutOverrides {
    /// Apply these overrides on top of `base`.
    pub fn apply(&self, base: LayoutConfig) -> LayoutConfig {
        LayoutConfig {
            page_width_dots: self.page_width_dots.unwrap_or(base.page_width_dots),
            page_length_dots: self.page_length_dots.unwrap_or(base.page_length_dots),
            darkness: self.darkness.unwrap_or(base.darkness),
            speed: self.speed.unwrap_or(base.speed),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let preset = PrinterConfig::default();
        Self {
            page_width_dots: preset.page_width_dots,
            page_length_dots: preset.page_length_dots,
            darkness: preset.darkness,
            speed: preset.speed,
        }
    }
}

impl LayoutConfig {
    fn page_setup(&self) -> PageSetup {
        PageSetup {
            width_dots: self.page_width_dots,
            length_dots: self.page_length_dots,
            darkness: self.darkness,
            speed: self.speed,
        }
    }
}

/// Compose the label document for one container group.
pub fn compose(patient: &Patient, group: &ContainerGroup, layout: &LayoutConfig) -> LabelDocument {
    let page = layout.page_setup();
    let mut primitives = Vec::new();

    // Border first so every field paints on top of it.
    primitives.push(Primitive::Box {
        x: MARGIN,
        y: MARGIN,
        width: page.width_dots.saturating_sub(2 * MARGIN),
        height: page.length_dots.saturating_sub(2 * MARGIN),
        thickness: BOX_THICKNESS,
    });

    let visit = patient.visit_number.as_deref().unwrap_or(VISIT_FALLBACK);
    primitives.push(Primitive::Text {
        x: FIELD_X,
        y: VISIT_Y,
        rotation: Rotation::None,
        font: VISIT_FONT,
        h_mult: 1,
        w_mult: 1,
        content: visit.to_string(),
    });

    let barcode_data = patient
        .id
        .as_deref()
        .or(patient.visit_number.as_deref())
        .unwrap_or(BARCODE_FALLBACK);
    primitives.push(Primitive::Barcode {
        x: FIELD_X,
        y: BARCODE_Y,
        rotation: Rotation::None,
        symbology: Symbology::Code128,
        narrow: BARCODE_NARROW,
        wide: BARCODE_WIDE,
        height: BARCODE_HEIGHT,
        human_readable: true,
        data: barcode_data.to_string(),
    });

    let joined = group.test_names.join(TEST_NAME_SEPARATOR);
    let mut y = TESTS_TOP_Y;
    for line in chunk(&joined, TEST_LINE_WIDTH) {
        if line.trim().is_empty() {
            continue;
        }
        // Lines past the bottom edge cannot print; stop rather than let an
        // oversized order walk the coordinate off the label.
        if y >= page.length_dots {
            break;
        }
        primitives.push(Primitive::Text {
            x: FIELD_X,
            y,
            rotation: Rotation::None,
            font: TEST_FONT,
            h_mult: 1,
            w_mult: 1,
            content: line,
        });
        y = y.saturating_add(TEST_LINE_STEP);
    }

    if let Some(name) = &group.container.display_name {
        primitives.push(Primitive::Text {
            x: FIELD_X,
            y: y.saturating_add(CONTAINER_NAME_GAP),
            rotation: Rotation::None,
            font: TEST_FONT,
            h_mult: 1,
            w_mult: 1,
            content: name.clone(),
        });
    }

    LabelDocument { page, primitives }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Container;
    use pretty_assertions::assert_eq;

    fn patient(id: Option<&str>, visit: Option<&str>) -> Patient {
        Patient {
            id: id.map(String::from),
            name: Some("Jane Doe".to_string()),
            visit_number: visit.map(String::from),
        }
    }

    fn group_of(tests: &[&str], display_name: Option<&str>) -> ContainerGroup {
        ContainerGroup {
            container: Container {
                id: "7".to_string(),
                display_name: display_name.map(String::from),
            },
            test_names: tests.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn text_contents(doc: &LabelDocument) -> Vec<&str> {
        doc.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_paint_order() {
        let doc = compose(
            &patient(Some("P1"), Some("V100")),
            &group_of(&["CBC"], Some("Lavender Tube")),
            &LayoutConfig::default(),
        );

        // Box first, then visit text, then barcode, tests, container name.
        assert!(matches!(doc.primitives[0], Primitive::Box { .. }));
        assert!(matches!(doc.primitives[1], Primitive::Text { .. }));
        assert!(matches!(doc.primitives[2], Primitive::Barcode { .. }));
        assert_eq!(text_contents(&doc), vec!["V100", "CBC", "Lavender Tube"]);
    }

    #[test]
    fn test_barcode_prefers_patient_id() {
        let doc = compose(
            &patient(Some("P1"), Some("V100")),
            &group_of(&["CBC"], None),
            &LayoutConfig::default(),
        );
        let Primitive::Barcode {
            data,
            human_readable,
            ..
        } = &doc.primitives[2]
        else {
            panic!("expected barcode");
        };
        assert_eq!(data, "P1");
        assert!(human_readable);
    }

    #[test]
    fn test_barcode_falls_back_to_visit_then_zero() {
        let doc = compose(
            &patient(None, Some("V100")),
            &group_of(&["CBC"], None),
            &LayoutConfig::default(),
        );
        let Primitive::Barcode { data, .. } = &doc.primitives[2] else {
            panic!("expected barcode");
        };
        assert_eq!(data, "V100");

        let doc = compose(
            &patient(None, None),
            &group_of(&["CBC"], None),
            &LayoutConfig::default(),
        );
        let Primitive::Barcode { data, .. } = &doc.primitives[2] else {
            panic!("expected barcode");
        };
        assert_eq!(data, "0");
    }

    #[test]
    fn test_missing_visit_number_prints_fallback() {
        let doc = compose(
            &patient(Some("P1"), None),
            &group_of(&["CBC"], None),
            &LayoutConfig::default(),
        );
        assert_eq!(text_contents(&doc)[0], "N/A");
    }

    #[test]
    fn test_long_test_list_wraps_and_steps_down() {
        let doc = compose(
            &patient(Some("P1"), Some("V100")),
            &group_of(&["Complete Blood Count", "Basic Metabolic Panel"], None),
            &LayoutConfig::default(),
        );

        let lines: Vec<(u16, &str)> = doc
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { y, content, .. } if *y >= TESTS_TOP_Y => {
                    Some((*y, content.as_str()))
                }
                _ => None,
            })
            .collect();

        assert!(lines.len() > 1);
        let joined: String = lines.iter().map(|(_, c)| *c).collect();
        assert_eq!(joined, "Complete Blood Count - Basic Metabolic Panel");
        for pair in lines.windows(2) {
            assert_eq!(pair[1].0 - pair[0].0, TEST_LINE_STEP);
        }
    }

    #[test]
    fn test_blank_wrapped_lines_are_skipped() {
        // 24 + " - " + "  " = 29 chars: the second chunk is all whitespace.
        let name_a = "a".repeat(TEST_LINE_WIDTH - 2);
        let doc = compose(
            &patient(Some("P1"), Some("V100")),
            &group_of(&[&name_a, "  "], None),
            &LayoutConfig::default(),
        );
        let contents = text_contents(&doc);
        // Visit header plus exactly one test line; the blank chunk is gone.
        assert_eq!(contents.len(), 2);
        for content in contents {
            assert!(!content.trim().is_empty());
        }
    }

    #[test]
    fn test_oversized_test_list_never_overflows_coordinates() {
        // Thousands of wrapped lines must not walk y past u16 or emit
        // fields below the label's bottom edge.
        let names: Vec<String> = (0..4000).map(|i| format!("Test {}", i)).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let doc = compose(
            &patient(Some("P1"), Some("V100")),
            &group_of(&name_refs, Some("Lavender Tube")),
            &LayoutConfig::default(),
        );

        for primitive in &doc.primitives {
            if let Primitive::Text { y, .. } = primitive {
                assert!(*y <= doc.page.length_dots + TEST_LINE_STEP + CONTAINER_NAME_GAP);
            }
        }
    }

    #[test]
    fn test_layout_overrides_merge_over_base() {
        let base = LayoutConfig {
            darkness: 12,
            ..Default::default()
        };
        let overrides = LayoutOverrides {
            speed: Some(4),
            ..Default::default()
        };

        let merged = overrides.apply(base);
        // The one supplied field changes; the rest keep the base values.
        assert_eq!(merged.speed, 4);
        assert_eq!(merged.darkness, 12);
        assert_eq!(merged.page_width_dots, base.page_width_dots);
    }

    #[test]
    fn test_layout_overrides_flow_into_page_setup() {
        let layout = LayoutConfig {
            darkness: 12,
            ..Default::default()
        };
        let doc = compose(
            &patient(Some("P1"), Some("V100")),
            &group_of(&["CBC"], None),
            &layout,
        );
        assert_eq!(doc.page.darkness, 12);
        assert_eq!(
            doc.page.width_dots,
            PrinterConfig::default().page_width_dots
        );
    }
}
