//! Source cleaner: strips comments and whitespace from raw assembly lines.
//!
//! Mirrors `project6::parser::ParserLines::strip_comment` but as a
//! standalone, independently testable step so the two-pass symbol resolver
//! and the encoder both walk the same cleaned-line sequence.

/// Strips a trailing `//` comment from `line` using a byte scan.
#[inline]
#[must_use]
pub fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for i in 0..bytes.len().saturating_sub(1) {
        if bytes[i] == b'/' && bytes[i + 1] == b'/' {
            return &line[..i];
        }
    }
    line
}

/// Cleans every line: strips a `//` comment, trims surrounding whitespace,
/// and discards lines that become empty. Blank and comment-only lines
/// simply vanish from the output — they never reach the symbol resolver or
/// encoder.
#[must_use]
pub fn clean_lines(lines: &[String]) -> Vec<&str> {
    lines
        .iter()
        .filter_map(|line| {
            let trimmed = strip_comment(line).trim();
            (!trimmed.is_empty()).then_some(trimmed)
        })
        .collect()
}
