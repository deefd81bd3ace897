//! CLI utilities for ferro-sifts
//!
//! This module provides testable functions used by the CLI binary.
//! Parsing and output live in the library so they can be unit tested
//! against in-memory buffers.

pub mod format;
pub mod parse;

// Re-export commonly used items
pub use format::{
    output_error, output_error_with_context, output_header, output_issues, output_segments,
    output_translation, OutputFormat, TSV_HEADER,
};
pub use parse::{parse_direction, parse_range};

/// UTF-8 BOM (Byte Order Mark) constant
const UTF8_BOM: &str = "\u{feff}";

/// Strip UTF-8 BOM from the beginning of a string if present.
///
/// # Examples
///
/// ```
/// use ferro_sifts::cli::strip_bom;
///
/// assert_eq!(strip_bom("\u{feff}12 14"), "12 14");
/// assert_eq!(strip_bom("12 14"), "12 14");
/// ```
pub fn strip_bom(s: &str) -> &str {
    s.strip_prefix(UTF8_BOM).unwrap_or(s)
}

/// Strip inline comments from an input line.
///
/// Comments start with `#` and extend to the end of the line.
/// Leading/trailing whitespace is also trimmed.
///
/// # Examples
///
/// ```
/// use ferro_sifts::cli::strip_inline_comment;
///
/// assert_eq!(strip_inline_comment("12-14  # helix"), "12-14");
/// assert_eq!(strip_inline_comment("# full line comment"), "");
/// ```
pub fn strip_inline_comment(s: &str) -> &str {
    match s.find('#') {
        Some(pos) => s[..pos].trim(),
        None => s.trim(),
    }
}

/// Process an input line: trim whitespace, strip BOM (for first line), and strip inline comments.
///
/// Returns None if the line is empty or a comment-only line.
///
/// # Examples
///
/// ```
/// use ferro_sifts::cli::process_input_line;
///
/// assert_eq!(process_input_line("12 14", false), Some("12 14"));
/// assert_eq!(process_input_line("\u{feff}12 14", true), Some("12 14"));
/// assert_eq!(process_input_line("# comment", false), None);
/// assert_eq!(process_input_line("", false), None);
/// ```
pub fn process_input_line(line: &str, is_first_line: bool) -> Option<&str> {
    let line = line.trim();
    let line = if is_first_line { strip_bom(line) } else { line };
    let line = strip_inline_comment(line);

    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}test"), "test");
        assert_eq!(strip_bom("\u{feff}"), "");
        assert_eq!(strip_bom(""), "");
    }

    #[test]
    fn test_strip_inline_comment() {
        assert_eq!(strip_inline_comment("1 5#note"), "1 5");
        assert_eq!(strip_inline_comment("  1 5  "), "1 5");
    }

    #[test]
    fn test_process_input_line() {
        assert_eq!(process_input_line("1-5  # domain", false), Some("1-5"));
        assert_eq!(process_input_line("   ", false), None);
        // BOM only stripped on the first line
        assert_eq!(
            process_input_line("\u{feff}1-5", false),
            Some("\u{feff}1-5")
        );
    }
}
