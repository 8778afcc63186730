//! # Text Chunking
//!
//! Splits an arbitrary-length string into fixed-width lines for multi-line
//! label fields. Widths are measured in Unicode scalar values so multibyte
//! input never splits a code point.

/// Split `text` into chunks of at most `max_width` characters.
///
/// Concatenating the result reproduces `text` exactly; the empty string
/// still occupies one (empty) printed line.
///
/// # Panics
///
/// Panics if `max_width` is zero.
pub fn chunk(text: &str, max_width: usize) -> Vec<String> {
    assert!(max_width > 0, "chunk width must be positive");

    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }

    chars
        .chunks(max_width)
        .map(|line| line.iter().collect())
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_concatenation_reconstructs_input() {
        let input = "Complete Blood Count - Basic Metabolic Panel";
        for width in 1..=input.len() + 5 {
            let chunks = chunk(input, width);
            assert_eq!(chunks.concat(), input, "width {}", width);
            assert!(chunks.iter().all(|c| c.chars().count() <= width));
        }
    }

    #[test]
    fn test_chunk_count_is_ceiling_division() {
        // 47 characters at width 20: lines of 20, 20 and 7.
        let input = "a".repeat(47);
        let chunks = chunk(&input, 20);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 20);
        assert_eq!(chunks[1].len(), 20);
        assert_eq!(chunks[2].len(), 7);
    }

    #[test]
    fn test_empty_string_yields_one_empty_chunk() {
        assert_eq!(chunk("", 10), vec![String::new()]);
    }

    #[test]
    fn test_exact_fit_has_no_trailing_chunk() {
        assert_eq!(chunk("abcdef", 3), vec!["abc", "def"]);
    }

    #[test]
    fn test_multibyte_input_splits_on_char_boundaries() {
        let chunks = chunk("áéíóú", 2);
        assert_eq!(chunks, vec!["áé", "íó", "ú"]);
        assert_eq!(chunks.concat(), "áéíóú");
    }

    #[test]
    #[should_panic(expected = "chunk width must be positive")]
    fn test_zero_width_panics() {
        chunk("abc", 0);
    }
}
