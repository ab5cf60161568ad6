//! Writing tracker links back into a note.

use serde::Serialize;
use tracing::debug;

use super::editor::{DocumentEditor, Position};
use crate::core::parse_task_structure;
use crate::error::TasklinkError;

/// Default label of the project link inserted under the title.
pub const DEFAULT_PROJECT_LINK_LABEL: &str = "Todoist";

/// A single replacement in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    /// Start of the replaced range.
    pub start: Position,
    /// End of the replaced range (exclusive).
    pub end: Position,
    /// Replacement text.
    pub text: String,
}

impl TextEdit {
    /// Apply the edit to a document.
    ///
    /// # Errors
    ///
    /// Propagates range errors from the editor.
    pub fn apply<E: DocumentEditor + ?Sized>(&self, editor: &mut E) -> Result<(), TasklinkError> {
        debug!(start = ?self.start, end = ?self.end, text = %self.text, "applying edit");
        editor.replace_range(self.start, self.end, &self.text)
    }
}

/// Turn the text of a line into a markdown link to `url`.
///
/// On task lines the text after the checkbox is linked; elsewhere the
/// link starts at the first ASCII letter or digit. Trailing whitespace is
/// dropped. Returns `None` when there is nothing to link.
///
/// # Examples
///
/// ```
/// use tasklink::features::link::link_task_line;
///
/// let edit = link_task_line(0, "- [ ] Buy milk", "https://t.example/1").unwrap();
/// assert_eq!(edit.start.ch, 6);
/// assert_eq!(edit.text, "[Buy milk](https://t.example/1)");
/// ```
#[must_use]
pub fn link_task_line(line_no: usize, line: &str, url: &str) -> Option<TextEdit> {
    let start_byte = match parse_task_structure(line) {
        Some(task) if task.text.is_empty() => return None,
        Some(task) => line.trim_end().len().checked_sub(task.text.len())?,
        None => line.find(|c: char| c.is_ascii_alphanumeric())?,
    };

    let rest = line.get(start_byte..)?.trim_end();
    if rest.is_empty() {
        return None;
    }

    Some(TextEdit {
        start: Position::new(line_no, line[..start_byte].chars().count()),
        end: Position::new(line_no, line.chars().count()),
        text: format!("[{rest}]({url})"),
    })
}

/// Link a line of a document to `url`.
///
/// # Errors
///
/// Returns `TasklinkError::NotFound` if the line does not exist and
/// `TasklinkError::InvalidInput` if it has no text to link.
pub fn apply_task_link<E: DocumentEditor + ?Sized>(
    editor: &mut E,
    line_no: usize,
    url: &str,
) -> Result<TextEdit, TasklinkError> {
    let line = editor
        .line(line_no)
        .ok_or_else(|| TasklinkError::NotFound(format!("line {} of the note", line_no + 1)))?;
    let edit = link_task_line(line_no, line, url).ok_or_else(|| {
        TasklinkError::InvalidInput(format!("line {} has no text to link", line_no + 1))
    })?;
    edit.apply(editor)?;
    Ok(edit)
}

/// Where the project link goes.
///
/// After the first line starting with `#`, separated by a blank line, or at
/// the very top of the note when it has none.
#[must_use]
pub fn project_link_insertion<E: DocumentEditor + ?Sized>(
    editor: &E,
    url: &str,
    label: &str,
) -> TextEdit {
    let link = format!("[{label}]({url})");
    let heading = (0..editor.line_count())
        .find_map(|n| editor.line(n).filter(|l| l.starts_with('#')).map(|l| (n, l)));

    match heading {
        Some((line_no, line)) => {
            let end = Position::new(line_no, line.chars().count());
            TextEdit {
                start: end,
                end,
                text: format!("\n\n{link}"),
            }
        },
        None => TextEdit {
            start: Position::new(0, 0),
            end: Position::new(0, 0),
            text: format!("{link}\n\n"),
        },
    }
}

/// Insert the project link into a document.
///
/// # Errors
///
/// Propagates range errors from the editor.
pub fn apply_project_link<E: DocumentEditor + ?Sized>(
    editor: &mut E,
    url: &str,
    label: &str,
) -> Result<TextEdit, TasklinkError> {
    let edit = project_link_insertion(editor, url, label);
    edit.apply(editor)?;
    Ok(edit)
}
