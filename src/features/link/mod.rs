//! Host integration helpers.
//!
//! Builds what a task-tracker client and an editor need from a note line:
//! task and project drafts with back-links into the vault, and the edits
//! that write tracker links back into the note. The host supplies the
//! collaborators ([`LinkResolver`], [`DocumentEditor`]) explicitly.

mod draft;
mod editor;
mod headings;
mod insert;
mod resolver;

pub use draft::{
    deep_link, draft_project, draft_task, note_title, prepare_task, render_wiki_links,
    DraftContext, ProjectDraft, TaskDraft, DEFAULT_BACK_REFERENCE_LABEL,
};
pub use editor::{Document, DocumentEditor, Position};
pub use headings::{find_previous_header, parse_headings, Heading};
pub use insert::{
    apply_project_link, apply_task_link, link_task_line, project_link_insertion, TextEdit,
    DEFAULT_PROJECT_LINK_LABEL,
};
pub use resolver::{FsLinkResolver, LinkResolver, NoopResolver};
