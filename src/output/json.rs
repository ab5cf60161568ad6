//! JSON output formatting for tasklink.

use serde::Serialize;
use serde_json::json;

use crate::core::ParsedLine;
use crate::error::TasklinkError;
use crate::features::link::{ProjectDraft, TaskDraft, TextEdit};

/// Format parsed lines as JSON
///
/// # Errors
///
/// Returns `TasklinkError::Parse` if JSON serialization fails.
pub fn format_parsed_lines_json(lines: &[ParsedLine]) -> Result<String, TasklinkError> {
    let output = json!({
        "count": lines.len(),
        "items": lines
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a task draft as JSON, in the shape a tracker client sends
///
/// # Errors
///
/// Returns `TasklinkError::Parse` if JSON serialization fails.
pub fn format_task_draft_json(draft: &TaskDraft) -> Result<String, TasklinkError> {
    let output = json!({
        "content": draft.content,
        "description": draft.description,
        "due_date": draft.due_date,
        "priority": draft.tracker_priority(),
        "priority_name": draft.priority.to_string(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a project draft as JSON
///
/// # Errors
///
/// Returns `TasklinkError::Parse` if JSON serialization fails.
pub fn format_project_draft_json(draft: &ProjectDraft) -> Result<String, TasklinkError> {
    Ok(serde_json::to_string_pretty(draft)?)
}

/// Format edited text and the edit that produced it as JSON
///
/// # Errors
///
/// Returns `TasklinkError::Parse` if JSON serialization fails.
pub fn format_edit_json(text: &str, edit: &TextEdit) -> Result<String, TasklinkError> {
    let output = json!({
        "text": text,
        "edit": edit
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TasklinkError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TasklinkError> {
    Ok(serde_json::to_string_pretty(value)?)
}
