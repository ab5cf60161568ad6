use colored::Colorize;

use crate::core::{ParsedLine, Priority};
use crate::features::link::{ProjectDraft, TaskDraft};

fn priority_label(priority: Priority) -> String {
    match priority {
        Priority::High => "high".red().bold().to_string(),
        Priority::Medium => "medium".yellow().to_string(),
        Priority::Low => "low".blue().to_string(),
        Priority::None => "none".dimmed().to_string(),
    }
}

/// Format parsed lines as pretty output
pub fn format_parsed_lines_pretty(lines: &[ParsedLine]) -> String {
    if lines.is_empty() {
        return "Lines (0)\n  No input".to_string();
    }

    let mut output = String::new();
    for (index, parsed) in lines.iter().enumerate() {
        if index > 0 {
            output.push_str(&"─".repeat(60));
            output.push('\n');
        }
        output.push_str(&format_parsed_line_pretty(parsed));
    }
    output
}

/// Format a single parsed line as pretty output
pub fn format_parsed_line_pretty(parsed: &ParsedLine) -> String {
    let mut output = match &parsed.task {
        Some(task) => {
            let status_icon = if task.is_complete() {
                format!("[{}]", task.status).green()
            } else {
                format!("[{}]", task.status).white()
            };
            format!("{} {}\n", status_icon, parsed.text.bold())
        },
        None => format!("{} {}\n", "·".dimmed(), parsed.text),
    };

    if let Some(task) = &parsed.task {
        output.push_str(&format!(
            "  {}: {:?}\n",
            "Marker".dimmed(),
            task.marker
        ));
        if !task.indentation.is_empty() {
            output.push_str(&format!(
                "  {}: {:?}\n",
                "Indent".dimmed(),
                task.indentation
            ));
        }
    }

    for date in &parsed.dates {
        let value = if Some(&date.value) == parsed.date.as_ref() {
            date.value.yellow().bold().to_string()
        } else {
            date.value.clone()
        };
        output.push_str(&format!("  {} {}: {}\n", date.kind.glyph(), date.kind, value));
    }

    output.push_str(&format!(
        "  {}: {}\n",
        "Priority".dimmed(),
        priority_label(parsed.priority)
    ));

    if !parsed.wiki_links.is_empty() {
        let links = parsed
            .wiki_links
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!("  {}: {}\n", "Links".dimmed(), links.cyan()));
    }

    output
}

/// Format a task draft as pretty output
pub fn format_task_draft_pretty(draft: &TaskDraft) -> String {
    let mut output = format!("{} {}\n", "Task:".green().bold(), draft.content.bold());
    output.push_str(&format!(
        "  {}: {}\n",
        "Description".dimmed(),
        draft.description
    ));
    if let Some(due) = &draft.due_date {
        output.push_str(&format!("  {}: {}\n", "Due".dimmed(), due.yellow()));
    }
    output.push_str(&format!(
        "  {}: {} ({})\n",
        "Priority".dimmed(),
        priority_label(draft.priority),
        draft.tracker_priority()
    ));
    output
}

/// Format a project draft as pretty output
pub fn format_project_draft_pretty(draft: &ProjectDraft) -> String {
    format!(
        "{} {}\n  {}: {}\n",
        "Project:".green().bold(),
        draft.name.bold(),
        "Comment".dimmed(),
        draft.comment
    )
}
