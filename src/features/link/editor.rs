//! Document editing seam.

use serde::Serialize;

use crate::error::TasklinkError;

/// A location in a document. `ch` counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Position {
    /// Zero-based line number.
    pub line: usize,
    /// Zero-based character offset within the line.
    pub ch: usize,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// The operations link insertion needs from an editor.
pub trait DocumentEditor {
    /// Number of lines, counting a trailing empty line.
    fn line_count(&self) -> usize;

    /// The text of a line without its newline.
    fn line(&self, line: usize) -> Option<&str>;

    /// Replace the text between `start` and `end` with `text`.
    ///
    /// # Errors
    ///
    /// Returns `TasklinkError::InvalidInput` if either position lies outside
    /// the document or `end` precedes `start`.
    fn replace_range(
        &mut self,
        start: Position,
        end: Position,
        text: &str,
    ) -> Result<(), TasklinkError>;
}

/// An in-memory document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    /// Wrap document text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The full document text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the document, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    fn offset(&self, pos: Position) -> Option<usize> {
        let mut line_start = 0;
        for (index, line) in self.text.split('\n').enumerate() {
            if index == pos.line {
                let within = match line.char_indices().nth(pos.ch) {
                    Some((byte, _)) => byte,
                    None if line.chars().count() == pos.ch => line.len(),
                    None => return None,
                };
                return Some(line_start + within);
            }
            line_start += line.len() + 1;
        }
        None
    }
}

impl DocumentEditor for Document {
    fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    fn line(&self, line: usize) -> Option<&str> {
        self.text.split('\n').nth(line)
    }

    fn replace_range(
        &mut self,
        start: Position,
        end: Position,
        text: &str,
    ) -> Result<(), TasklinkError> {
        if end < start {
            return Err(TasklinkError::InvalidInput(format!(
                "range end {end:?} precedes start {start:?}"
            )));
        }
        let from = self
            .offset(start)
            .ok_or_else(|| TasklinkError::InvalidInput(format!("position {start:?} is outside the document")))?;
        let to = self
            .offset(end)
            .ok_or_else(|| TasklinkError::InvalidInput(format!("position {end:?} is outside the document")))?;

        self.text.replace_range(from..to, text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        let doc = Document::new("# Title\n- [ ] task\n");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line(0), Some("# Title"));
        assert_eq!(doc.line(1), Some("- [ ] task"));
        assert_eq!(doc.line(2), Some(""));
        assert_eq!(doc.line(3), None);
    }

    #[test]
    fn test_insert_at_point() {
        let mut doc = Document::new("ab\ncd");
        doc.replace_range(Position::new(1, 1), Position::new(1, 1), "X")
            .unwrap();
        assert_eq!(doc.text(), "ab\ncXd");
    }

    #[test]
    fn test_replace_to_line_end() {
        let mut doc = Document::new("- [ ] Buy milk\nnext");
        doc.replace_range(Position::new(0, 6), Position::new(0, 14), "[Buy milk](u)")
            .unwrap();
        assert_eq!(doc.text(), "- [ ] [Buy milk](u)\nnext");
    }

    #[test]
    fn test_character_offsets_not_bytes() {
        let mut doc = Document::new("📅 ok");
        doc.replace_range(Position::new(0, 2), Position::new(0, 4), "fine")
            .unwrap();
        assert_eq!(doc.text(), "📅 fine");
    }

    #[test]
    fn test_out_of_range() {
        let mut doc = Document::new("short");
        assert!(doc
            .replace_range(Position::new(0, 9), Position::new(0, 9), "x")
            .is_err());
        assert!(doc
            .replace_range(Position::new(4, 0), Position::new(4, 0), "x")
            .is_err());
        assert!(doc
            .replace_range(Position::new(0, 3), Position::new(0, 1), "x")
            .is_err());
        assert_eq!(doc.into_text(), "short");
    }
}
