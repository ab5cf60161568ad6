//! Tracker drafts built from a note line.
//!
//! A draft is everything a tracker client needs to create a task or
//! project. Nothing here talks to the tracker.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use super::resolver::LinkResolver;
use crate::core::{
    extract_dates, extract_priority, find_wiki_links, select_date, strip_date_markers,
    parse_task_structure, strip_priority_markers, Priority,
};
use crate::error::TasklinkError;

/// Default label of the back-reference link in a task description.
pub const DEFAULT_BACK_REFERENCE_LABEL: &str = "o";

static LIST_PREFIX: Lazy<Regex> = Lazy::new(|| {
    // Quote markers and a plain bullet left on lines without a checkbox
    Regex::new(r"^[\s>]*(?:(?:[-*+]|[0-9]+\.)[ \t]+)?")
        .unwrap_or_else(|e| panic!("Invalid list prefix regex: {e}"))
});

/// Where a line came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftContext {
    /// Vault name used in deep links.
    pub vault: String,
    /// Path of the note, relative to the vault root.
    pub note_path: String,
    /// Label of the back-reference link.
    pub back_reference_label: String,
    /// Heading the line sits under, if known.
    pub section: Option<String>,
}

impl DraftContext {
    /// Create a context for a note in a vault.
    #[must_use]
    pub fn new(vault: impl Into<String>, note_path: impl Into<String>) -> Self {
        Self {
            vault: vault.into(),
            note_path: note_path.into(),
            back_reference_label: DEFAULT_BACK_REFERENCE_LABEL.to_string(),
            section: None,
        }
    }

    /// Use a different back-reference label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.back_reference_label = label.into();
        self
    }

    /// Record the section heading of the line.
    #[must_use]
    pub fn with_section(mut self, section: Option<String>) -> Self {
        self.section = section;
        self
    }

    /// Deep link to the note.
    #[must_use]
    pub fn deep_link(&self) -> String {
        deep_link(&self.vault, &self.note_path)
    }

    fn back_reference(&self) -> String {
        format!("[{}]({})", self.back_reference_label, self.deep_link())
    }
}

/// A task ready to be sent to the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDraft {
    /// Task title.
    pub content: String,
    /// Back-reference to the note.
    pub description: String,
    /// Selected date, when it is a real calendar date.
    pub due_date: Option<String>,
    /// Priority marker level.
    pub priority: Priority,
}

impl TaskDraft {
    /// Priority on the tracker's 1-4 scale.
    #[must_use]
    pub const fn tracker_priority(&self) -> u8 {
        self.priority.as_tracker_value()
    }
}

/// A project named after a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDraft {
    /// Project name.
    pub name: String,
    /// Comment holding the back-reference.
    pub comment: String,
}

/// Build a deep link that opens a note in the vault.
///
/// # Examples
///
/// ```
/// use tasklink::features::link::deep_link;
///
/// assert_eq!(
///     deep_link("My Vault", "Daily/2023-02-01.md"),
///     "obsidian://open?vault=My%20Vault&file=Daily%2F2023-02-01"
/// );
/// ```
#[must_use]
pub fn deep_link(vault: &str, note_path: &str) -> String {
    let file = note_path.strip_suffix(".md").unwrap_or(note_path);
    format!(
        "obsidian://open?vault={}&file={}",
        urlencoding::encode(vault),
        urlencoding::encode(file)
    )
}

/// The title of a note: its file name without directory or `.md`.
#[must_use]
pub fn note_title(note_path: &str) -> String {
    let name = Path::new(note_path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(note_path);
    name.strip_suffix(".md").unwrap_or(name).trim().to_string()
}

/// Turn a note line into tracker task content.
///
/// Strips checklist markup, date and priority markers, and collapses
/// whitespace. Lines without a checkbox also lose a plain bullet or quote
/// prefix. Wiki-links are left as they are.
#[must_use]
pub fn prepare_task(line: &str) -> String {
    let text = match parse_task_structure(line) {
        Some(task) => task.text,
        None => LIST_PREFIX.replace(line, "").into_owned(),
    };
    clean_whitespace(&strip_priority_markers(&strip_date_markers(&text)))
}

/// Replace wiki-links with markdown links into the vault.
///
/// Unresolved links are reduced to their display text.
pub fn render_wiki_links<R: LinkResolver + ?Sized>(
    content: &str,
    resolver: &R,
    vault: &str,
    source_path: &str,
) -> String {
    let mut rendered = content.to_string();
    for link in find_wiki_links(content) {
        let replacement = resolver.resolve(link.target(), source_path).map_or_else(
            || link.display().to_string(),
            |target| format!("[{}]({})", link.display(), deep_link(vault, &target)),
        );
        rendered = rendered.replacen(&link.link, &replacement, 1);
    }
    rendered
}

/// Build a task draft from a note line.
///
/// # Errors
///
/// Returns `TasklinkError::InvalidInput` if nothing is left of the line once
/// markup is removed.
pub fn draft_task<R: LinkResolver + ?Sized>(
    line: &str,
    ctx: &DraftContext,
    resolver: &R,
) -> Result<TaskDraft, TasklinkError> {
    let content = render_wiki_links(&prepare_task(line), resolver, &ctx.vault, &ctx.note_path);
    if content.is_empty() {
        return Err(TasklinkError::InvalidInput(format!(
            "no task text found in line {line:?}"
        )));
    }

    let dates = extract_dates(line);
    let due_date = select_date(&dates).and_then(|date| {
        if date.to_naive_date().is_some() {
            Some(date.value.clone())
        } else {
            warn!(date = %date.value, kind = %date.kind, "dropping invalid calendar date");
            None
        }
    });

    let mut description = ctx.back_reference();
    if let Some(section) = &ctx.section {
        description.push_str(" › ");
        description.push_str(section);
    }

    let draft = TaskDraft {
        content,
        description,
        due_date,
        priority: extract_priority(line),
    };
    debug!(?draft, note = %ctx.note_path, "drafted task");
    Ok(draft)
}

/// Build a project draft named after the context's note.
///
/// # Errors
///
/// Returns `TasklinkError::InvalidInput` if the note has no usable name.
pub fn draft_project(ctx: &DraftContext) -> Result<ProjectDraft, TasklinkError> {
    let name = note_title(&ctx.note_path);
    if name.is_empty() {
        return Err(TasklinkError::InvalidInput(format!(
            "cannot name a project after {:?}",
            ctx.note_path
        )));
    }

    let draft = ProjectDraft {
        name,
        comment: ctx.back_reference(),
    };
    debug!(?draft, "drafted project");
    Ok(draft)
}

fn clean_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::link::resolver::{MockLinkResolver, NoopResolver};
    use mockall::predicate::eq;

    fn ctx() -> DraftContext {
        DraftContext::new("Vault", "Inbox.md")
    }

    // ================
    // Deep Link Tests
    // ================

    #[test]
    fn test_deep_link_encodes_components() {
        assert_eq!(
            deep_link("Work & Life", "A note?.md"),
            "obsidian://open?vault=Work%20%26%20Life&file=A%20note%3F"
        );
    }

    #[test]
    fn test_deep_link_keeps_other_extensions() {
        assert_eq!(
            deep_link("V", "board.canvas"),
            "obsidian://open?vault=V&file=board.canvas"
        );
    }

    #[test]
    fn test_note_title() {
        assert_eq!(note_title("Inbox.md"), "Inbox");
        assert_eq!(note_title("Projects/Roof Repair.md"), "Roof Repair");
        assert_eq!(note_title("notes.txt"), "notes.txt");
        assert_eq!(note_title(".md"), "");
    }

    // ==================
    // Prepare Tests
    // ==================

    #[test]
    fn test_prepare_task_line() {
        assert_eq!(
            prepare_task("\t- [ ] Pay rent 📅 2023-02-01 ⏫"),
            "Pay rent"
        );
    }

    #[test]
    fn test_prepare_plain_bullet() {
        assert_eq!(prepare_task("  * Water plants 🔽"), "Water plants");
        assert_eq!(prepare_task("> 3. Quoted step"), "Quoted step");
    }

    #[test]
    fn test_prepare_keeps_leading_numbers_and_links() {
        assert_eq!(prepare_task("1.5 kg flour"), "1.5 kg flour");
        assert_eq!(prepare_task("[[Mom]] birthday"), "[[Mom]] birthday");
        assert_eq!(prepare_task("- [x] [[Mom]] call"), "[[Mom]] call");
    }

    #[test]
    fn test_prepare_keeps_list_text_inside_task() {
        assert_eq!(prepare_task("- [ ] 2. Call the bank"), "2. Call the bank");
        assert_eq!(prepare_task("- [ ] - dash first"), "- dash first");
    }

    #[test]
    fn test_prepare_marker_only_line() {
        assert_eq!(prepare_task("- [ ] 📅 2023-02-01"), "");
    }

    // ===================
    // Wiki Link Tests
    // ===================

    #[test]
    fn test_render_resolved_link() {
        let mut resolver = MockLinkResolver::new();
        resolver
            .expect_resolve()
            .with(eq("Garden"), eq("Inbox.md"))
            .times(1)
            .returning(|_, _| Some("Areas/Garden.md".to_string()));

        let rendered = render_wiki_links("Weed the [[Garden|beds]]", &resolver, "V", "Inbox.md");
        assert_eq!(
            rendered,
            "Weed the [beds](obsidian://open?vault=V&file=Areas%2FGarden)"
        );
    }

    #[test]
    fn test_render_unresolved_link() {
        let rendered = render_wiki_links("Ask [[Ana]] and [[Bo|Bob]]", &NoopResolver, "V", "x.md");
        assert_eq!(rendered, "Ask Ana and Bob");
    }

    #[test]
    fn test_render_duplicate_links_in_order() {
        let mut resolver = MockLinkResolver::new();
        resolver
            .expect_resolve()
            .times(2)
            .returning(|text, _| Some(format!("{text}.md")));

        let rendered = render_wiki_links("[[A]] vs [[A]]", &resolver, "V", "x.md");
        assert_eq!(
            rendered,
            "[A](obsidian://open?vault=V&file=A) vs [A](obsidian://open?vault=V&file=A)"
        );
    }

    // ================
    // Task Draft Tests
    // ================

    #[test]
    fn test_draft_task() {
        let draft = draft_task(
            "- [ ] Task test text 🛫 2023-02-03 ⏳ 2023-02-02 ⏫",
            &ctx(),
            &NoopResolver,
        )
        .unwrap();

        assert_eq!(draft.content, "Task test text");
        assert_eq!(draft.description, "[o](obsidian://open?vault=Vault&file=Inbox)");
        assert_eq!(draft.due_date.as_deref(), Some("2023-02-02"));
        assert_eq!(draft.priority, Priority::High);
        assert_eq!(draft.tracker_priority(), 4);
    }

    #[test]
    fn test_draft_task_with_section_and_label() {
        let ctx = ctx()
            .with_label("note")
            .with_section(Some("Errands".to_string()));
        let draft = draft_task("Buy milk", &ctx, &NoopResolver).unwrap();

        assert_eq!(
            draft.description,
            "[note](obsidian://open?vault=Vault&file=Inbox) › Errands"
        );
        assert_eq!(draft.due_date, None);
        assert_eq!(draft.tracker_priority(), 1);
    }

    #[test]
    fn test_draft_task_drops_impossible_date() {
        let draft = draft_task("File taxes 📅 2023-02-30", &ctx(), &NoopResolver).unwrap();
        assert_eq!(draft.content, "File taxes");
        assert_eq!(draft.due_date, None);
    }

    #[test]
    fn test_draft_task_resolves_links() {
        let mut resolver = MockLinkResolver::new();
        resolver
            .expect_resolve()
            .with(eq("Mom"), eq("Inbox.md"))
            .returning(|_, _| Some("People/Mom.md".to_string()));

        let draft = draft_task("* [ ] Call [[Mom]] 🔼", &ctx(), &resolver).unwrap();
        assert_eq!(
            draft.content,
            "Call [Mom](obsidian://open?vault=Vault&file=People%2FMom)"
        );
        assert_eq!(draft.priority, Priority::Medium);
    }

    #[test]
    fn test_draft_task_empty_line() {
        assert!(matches!(
            draft_task("- [ ]   ", &ctx(), &NoopResolver),
            Err(TasklinkError::InvalidInput(_))
        ));
        assert!(draft_task("", &ctx(), &NoopResolver).is_err());
    }

    // ===================
    // Project Draft Tests
    // ===================

    #[test]
    fn test_draft_project() {
        let ctx = DraftContext::new("Vault", "Projects/Roof Repair.md");
        let draft = draft_project(&ctx).unwrap();
        assert_eq!(draft.name, "Roof Repair");
        assert_eq!(
            draft.comment,
            "[o](obsidian://open?vault=Vault&file=Projects%2FRoof%20Repair)"
        );
    }

    #[test]
    fn test_draft_project_without_name() {
        let ctx = DraftContext::new("Vault", ".md");
        assert!(draft_project(&ctx).is_err());
    }
}
