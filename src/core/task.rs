//! Checklist task recognition.
//!
//! A task line is a list item carrying a one-character checkbox:
//!
//! ```text
//! <indentation><marker> +[<status>] *<text>
//! ```
//!
//! Detection and stripping both go through [`parse_task_structure`], so the
//! two can never disagree about what a task is.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Leading whitespace, tabs and `>` (nested blockquotes and callouts).
const INDENTATION: &str = r"(?P<indentation>[\s\t>]*)";

/// `-`, `*` or a decimal number followed by `.`.
const LIST_MARKER: &str = r"(?P<marker>[-*]|[0-9]+\.)";

/// Exactly one status character between square brackets.
const CHECKBOX: &str = r"\[(?P<status>.)\]";

/// Everything after the checkbox, leading spaces skipped.
const REMAINDER: &str = r" *(?P<text>.*)";

static TASK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{INDENTATION}{LIST_MARKER} +{CHECKBOX}{REMAINDER}"))
        .unwrap_or_else(|e| panic!("Invalid task regex: {e}"))
});

/// The pieces of a checklist line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskStructure {
    /// Whitespace and `>` run before the list marker.
    pub indentation: String,
    /// `-`, `*` or `N.`.
    pub marker: String,
    /// The character inside the checkbox (`x`, ` `, `>`, ...).
    pub status: char,
    /// Trimmed text after the checkbox.
    pub text: String,
}

impl TaskStructure {
    /// Whether the checkbox is ticked.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.status, 'x' | 'X')
    }

    /// Rebuild the line in normalized form (single spaces around the checkbox).
    #[must_use]
    pub fn to_line(&self) -> String {
        format!(
            "{}{} [{}] {}",
            self.indentation, self.marker, self.status, self.text
        )
    }
}

/// Parse a line as a checklist task.
///
/// Returns `None` when the line does not match the task grammar from its
/// first character.
///
/// # Examples
///
/// ```
/// use tasklink::core::parse_task_structure;
///
/// let task = parse_task_structure("\t1. [x] Ship it").unwrap();
/// assert_eq!(task.indentation, "\t");
/// assert_eq!(task.marker, "1.");
/// assert_eq!(task.status, 'x');
/// assert_eq!(task.text, "Ship it");
///
/// assert!(parse_task_structure("- not a task").is_none());
/// ```
#[must_use]
pub fn parse_task_structure(line: &str) -> Option<TaskStructure> {
    let caps = TASK_PATTERN.captures(line)?;
    let status = caps.name("status")?.as_str().chars().next()?;

    Some(TaskStructure {
        indentation: caps.name("indentation")?.as_str().to_string(),
        marker: caps.name("marker")?.as_str().to_string(),
        status,
        text: caps.name("text")?.as_str().trim().to_string(),
    })
}

/// Whether the line is a checklist task.
#[must_use]
pub fn is_task(line: &str) -> bool {
    parse_task_structure(line).is_some()
}

/// Remove list and checkbox markup from a task line.
///
/// Lines that are not tasks come back unchanged, including plain bullets
/// without a checkbox.
#[must_use]
pub fn strip_task_formatting(line: &str) -> String {
    parse_task_structure(line).map_or_else(|| line.to_string(), |task| task.text)
}
