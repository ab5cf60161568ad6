//! Output formatting for tasklink.
//!
//! This module provides formatters for displaying parse results and drafts
//! in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::ParsedLine;
use crate::error::TasklinkError;
use crate::features::link::{ProjectDraft, TaskDraft, TextEdit};

pub use json::*;
pub use pretty::*;

/// Format parsed lines based on output format
///
/// # Errors
///
/// Returns `TasklinkError::Parse` if JSON serialization fails.
pub fn format_parsed_lines(
    lines: &[ParsedLine],
    format: OutputFormat,
) -> Result<String, TasklinkError> {
    match format {
        OutputFormat::Pretty => Ok(format_parsed_lines_pretty(lines)),
        OutputFormat::Json => format_parsed_lines_json(lines),
    }
}

/// Format a task draft based on output format
///
/// # Errors
///
/// Returns `TasklinkError::Parse` if JSON serialization fails.
pub fn format_task_draft(draft: &TaskDraft, format: OutputFormat) -> Result<String, TasklinkError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_draft_pretty(draft)),
        OutputFormat::Json => format_task_draft_json(draft),
    }
}

/// Format a project draft based on output format
///
/// # Errors
///
/// Returns `TasklinkError::Parse` if JSON serialization fails.
pub fn format_project_draft(
    draft: &ProjectDraft,
    format: OutputFormat,
) -> Result<String, TasklinkError> {
    match format {
        OutputFormat::Pretty => Ok(format_project_draft_pretty(draft)),
        OutputFormat::Json => format_project_draft_json(draft),
    }
}

/// Format edited text based on output format
///
/// Pretty output is the edited text alone, so it can be piped.
///
/// # Errors
///
/// Returns `TasklinkError::Parse` if JSON serialization fails.
pub fn format_edit(text: &str, edit: &TextEdit, format: OutputFormat) -> Result<String, TasklinkError> {
    match format {
        OutputFormat::Pretty => Ok(text.to_string()),
        OutputFormat::Json => format_edit_json(text, edit),
    }
}
