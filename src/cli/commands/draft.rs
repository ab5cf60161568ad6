//! Task and project draft commands.
//!
//! This module implements `tasklink task` and `tasklink project`.

use std::path::Path;

use tracing::debug;

use crate::cli::args::{NoteArgs, OutputFormat, TaskArgs};
use crate::config::{Config, VaultConfig};
use crate::error::TasklinkError;
use crate::features::link::{
    draft_project, draft_task, find_previous_header, parse_headings, DraftContext,
    FsLinkResolver, LinkResolver, NoopResolver,
};
use crate::output::{format_project_draft, format_task_draft};

/// Execute the task command.
///
/// # Errors
///
/// Returns an error if the note cannot be read, the line does not exist,
/// the vault name is unknown, or the line has no task text.
pub fn task(config: &Config, args: TaskArgs, format: OutputFormat) -> Result<String, TasklinkError> {
    let vault = vault_config(config, &args.note);

    let (line, section) = match args.line_number {
        Some(number) => {
            let (note_line, section) = read_note_line(&args.note.file, number)?;
            (args.line.unwrap_or(note_line), section)
        },
        None => {
            let line = args.line.ok_or_else(|| {
                TasklinkError::InvalidInput("give a line or --line-number".to_string())
            })?;
            (line, None)
        },
    };

    let ctx = draft_context(config, &vault, &args.note.file)?.with_section(section);
    let resolver = resolver_for(&vault);
    let draft = draft_task(&line, &ctx, resolver.as_ref())?;
    format_task_draft(&draft, format)
}

/// Execute the project command.
///
/// # Errors
///
/// Returns an error if the vault name is unknown or the note has no name.
pub fn project(config: &Config, args: &NoteArgs, format: OutputFormat) -> Result<String, TasklinkError> {
    let vault = vault_config(config, args);
    let ctx = draft_context(config, &vault, &args.file)?;
    let draft = draft_project(&ctx)?;
    format_project_draft(&draft, format)
}

/// Apply command-line vault overrides to the configured vault.
pub(crate) fn vault_config(config: &Config, args: &NoteArgs) -> VaultConfig {
    let mut vault = config.vault.clone();
    if let Some(name) = &args.vault {
        vault.name = Some(name.clone());
    }
    if let Some(root) = &args.vault_root {
        vault.root = Some(root.clone());
    }
    vault
}

fn draft_context(
    config: &Config,
    vault: &VaultConfig,
    note: &Path,
) -> Result<DraftContext, TasklinkError> {
    let ctx = DraftContext::new(vault.name_for(note)?, vault.note_path(note))
        .with_label(config.links.back_reference_label.clone());
    debug!(vault = %ctx.vault, note = %ctx.note_path, "draft context");
    Ok(ctx)
}

fn resolver_for(vault: &VaultConfig) -> Box<dyn LinkResolver> {
    match &vault.root {
        Some(root) => Box::new(FsLinkResolver::new(root.clone())),
        None => Box::new(NoopResolver),
    }
}

/// Read a one-based line from a note, with the heading above it.
fn read_note_line(note: &Path, number: usize) -> Result<(String, Option<String>), TasklinkError> {
    let contents = std::fs::read_to_string(note)?;
    let index = number
        .checked_sub(1)
        .ok_or_else(|| TasklinkError::InvalidInput("line numbers start at 1".to_string()))?;
    let line = contents.lines().nth(index).ok_or_else(|| {
        TasklinkError::NotFound(format!("line {number} in {}", note.display()))
    })?;

    let headings = parse_headings(&contents);
    let section = find_previous_header(index, &headings).map(str::to_string);
    Ok((line.to_string(), section))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn note_args(file: PathBuf) -> NoteArgs {
        NoteArgs {
            file,
            vault: Some("Brain".to_string()),
            vault_root: None,
        }
    }

    #[test]
    fn test_task_from_argument() {
        let args = TaskArgs {
            line: Some("- [ ] Pay rent 📅 2023-02-01 ⏫".to_string()),
            note: note_args(PathBuf::from("Inbox.md")),
            line_number: None,
        };
        let out = task(&Config::default(), args, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["content"], "Pay rent");
        assert_eq!(value["description"], "[o](obsidian://open?vault=Brain&file=Inbox)");
        assert_eq!(value["due_date"], "2023-02-01");
        assert_eq!(value["priority"], 4);
    }

    #[test]
    fn test_task_from_note_line() {
        let dir = TempDir::new().unwrap();
        let note = dir.path().join("Inbox.md");
        std::fs::write(&note, "# Inbox\n## Errands\n- [ ] Buy [[Milk]] 🔽\n").unwrap();
        std::fs::write(dir.path().join("Milk.md"), "").unwrap();

        let mut note_args = note_args(note);
        note_args.vault_root = Some(dir.path().to_path_buf());
        let args = TaskArgs {
            line: None,
            note: note_args,
            line_number: Some(3),
        };
        let out = task(&Config::default(), args, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value["content"],
            "Buy [Milk](obsidian://open?vault=Brain&file=Milk)"
        );
        assert_eq!(
            value["description"],
            "[o](obsidian://open?vault=Brain&file=Inbox) › Errands"
        );
        assert_eq!(value["priority"], 2);
    }

    #[test]
    fn test_task_line_out_of_range() {
        let dir = TempDir::new().unwrap();
        let note = dir.path().join("Inbox.md");
        std::fs::write(&note, "- [ ] only line\n").unwrap();

        let args = TaskArgs {
            line: None,
            note: note_args(note.clone()),
            line_number: Some(5),
        };
        assert!(matches!(
            task(&Config::default(), args, OutputFormat::Pretty),
            Err(TasklinkError::NotFound(_))
        ));

        let args = TaskArgs {
            line: None,
            note: note_args(note),
            line_number: Some(0),
        };
        assert!(matches!(
            task(&Config::default(), args, OutputFormat::Pretty),
            Err(TasklinkError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_task_without_line() {
        let args = TaskArgs {
            line: None,
            note: note_args(PathBuf::from("Inbox.md")),
            line_number: None,
        };
        assert!(task(&Config::default(), args, OutputFormat::Pretty).is_err());
    }

    #[test]
    fn test_project() {
        let mut config = Config::default();
        config.links.back_reference_label = "note".to_string();
        let args = note_args(PathBuf::from("/vault/Projects/Roof Repair.md"));

        let out = project(&config, &args, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["name"], "Roof Repair");
        assert_eq!(
            value["comment"],
            "[note](obsidian://open?vault=Brain&file=Roof%20Repair)"
        );
    }

    #[test]
    fn test_vault_overrides() {
        let mut config = Config::default();
        config.vault.name = Some("Configured".to_string());
        let mut args = note_args(PathBuf::from("x.md"));
        args.vault_root = Some(PathBuf::from("/root/of/vault"));

        let vault = vault_config(&config, &args);
        assert_eq!(vault.name.as_deref(), Some("Brain"));
        assert_eq!(vault.root, Some(PathBuf::from("/root/of/vault")));
    }
}
