//! Section headings of a note.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(#{1,6})[ \t]+(.+?)[ \t#]*$").unwrap_or_else(|e| panic!("Invalid heading regex: {e}"))
});

/// An ATX heading and the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Zero-based line number.
    pub line: usize,
    /// Number of `#` characters.
    pub level: usize,
    /// Heading text without the `#` prefix.
    pub heading: String,
}

/// Collect the headings of a document in line order.
///
/// Lines inside fenced code blocks are skipped.
#[must_use]
pub fn parse_headings(document: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut in_fence = false;

    for (line, text) in document.lines().enumerate() {
        let trimmed = text.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(caps) = HEADING_PATTERN.captures(text) {
            if let (Some(hashes), Some(heading)) = (caps.get(1), caps.get(2)) {
                headings.push(Heading {
                    line,
                    level: hashes.as_str().len(),
                    heading: heading.as_str().to_string(),
                });
            }
        }
    }

    headings
}

/// The nearest heading at or above `line`.
///
/// `headings` must be in line order, as [`parse_headings`] returns them.
#[must_use]
pub fn find_previous_header(line: usize, headings: &[Heading]) -> Option<&str> {
    headings
        .iter()
        .take_while(|h| h.line <= line)
        .last()
        .map(|h| h.heading.as_str())
}
