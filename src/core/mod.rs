//! Line parsing for markdown tasks.
//!
//! Every function here takes one line and returns derived values. Nothing
//! is cached between calls and nothing can fail: a line without a task,
//! link, date or priority simply yields an empty result for that field.

mod datetime;
mod priority;
mod task;
mod wikilink;

use serde::Serialize;

pub use datetime::{
    extract_date, extract_dates, select_date, strip_date_markers, DateKind, ExtractedDate,
    MAX_DATE_PASSES,
};
pub use priority::{extract_priority, strip_priority_markers, Priority};
pub use task::{is_task, parse_task_structure, strip_task_formatting, TaskStructure};
pub use wikilink::{find_wiki_links, WikiLink};

/// Everything the parser can tell about one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedLine {
    /// The input, verbatim.
    pub line: String,
    /// Whether the line is a checklist task.
    pub is_task: bool,
    /// Task markup, when the line is a task.
    pub task: Option<TaskStructure>,
    /// The line with task markup stripped.
    pub text: String,
    /// Wiki-links in order of appearance.
    pub wiki_links: Vec<WikiLink>,
    /// First date of each category.
    pub dates: Vec<ExtractedDate>,
    /// The selected date (due, else scheduled, else start).
    pub date: Option<String>,
    /// Priority marker level.
    pub priority: Priority,
}

/// Run every extraction on a line.
///
/// # Examples
///
/// ```
/// use tasklink::core::{parse_line, Priority};
///
/// let parsed = parse_line("- [ ] Call [[Mom]] ⏳ 2023-02-02 🔼");
/// assert!(parsed.is_task);
/// assert_eq!(parsed.text, "Call [[Mom]] ⏳ 2023-02-02 🔼");
/// assert_eq!(parsed.wiki_links[0].text, "Mom");
/// assert_eq!(parsed.date.as_deref(), Some("2023-02-02"));
/// assert_eq!(parsed.priority, Priority::Medium);
/// ```
#[must_use]
pub fn parse_line(line: &str) -> ParsedLine {
    let task = parse_task_structure(line);
    let dates = extract_dates(line);
    let date = select_date(&dates).map(|d| d.value.clone());

    ParsedLine {
        line: line.to_string(),
        is_task: task.is_some(),
        text: task
            .as_ref()
            .map_or_else(|| line.to_string(), |t| t.text.clone()),
        task,
        wiki_links: find_wiki_links(line),
        dates,
        date,
        priority: extract_priority(line),
    }
}
