//! Command implementations for tasklink.
//!
//! This module contains the implementation of all CLI commands.

mod draft;

pub use draft::{project, task};

use std::io::BufRead;

use clap::CommandFactory;
use clap_complete::Shell;
use tracing::debug;

use crate::cli::args::{Cli, ConfigCommands, NoteArgs, OutputFormat};
use crate::config::{Config, Paths};
use crate::core::parse_line;
use crate::error::TasklinkError;
use crate::features::link::{apply_project_link, link_task_line, Document};
use crate::output::{format_edit, format_parsed_lines, to_json};

/// Execute parse command
///
/// Parses `lines`, or every line of `input` when `lines` is empty.
///
/// # Errors
///
/// Returns an error if reading input or output formatting fails.
pub fn parse<R: BufRead>(
    lines: &[String],
    input: R,
    format: OutputFormat,
) -> Result<String, TasklinkError> {
    let parsed = if lines.is_empty() {
        input
            .lines()
            .map(|line| line.map(|l| parse_line(&l)))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        lines.iter().map(|l| parse_line(l)).collect()
    };
    debug!(count = parsed.len(), "parsed lines");
    format_parsed_lines(&parsed, format)
}

/// Execute link command
///
/// # Errors
///
/// Returns an error if the line has no text to link or formatting fails.
pub fn link(line: &str, url: &str, format: OutputFormat) -> Result<String, TasklinkError> {
    let edit = link_task_line(0, line, url)
        .ok_or_else(|| TasklinkError::InvalidInput(format!("no text to link in {line:?}")))?;
    let mut doc = Document::new(line);
    edit.apply(&mut doc)?;
    format_edit(doc.text(), &edit, format)
}

/// Execute project-link command
///
/// # Errors
///
/// Returns an error if the note cannot be read or formatting fails.
pub fn project_link(
    config: &Config,
    note: &NoteArgs,
    url: &str,
    format: OutputFormat,
) -> Result<String, TasklinkError> {
    let mut doc = Document::new(std::fs::read_to_string(&note.file)?);
    let edit = apply_project_link(&mut doc, url, &config.links.project_link_label)?;
    format_edit(doc.text(), &edit, format)
}

/// Execute config command
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized or written.
pub fn config(
    config: &Config,
    paths: &Paths,
    command: ConfigCommands,
    format: OutputFormat,
) -> Result<String, TasklinkError> {
    match command {
        ConfigCommands::Show => match format {
            OutputFormat::Pretty => config.to_yaml(),
            OutputFormat::Json => to_json(config),
        },
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
        ConfigCommands::Init => {
            if paths.config_file.exists() {
                return Ok(format!(
                    "Config already exists at {}",
                    paths.config_file.display()
                ));
            }
            paths.ensure_dirs()?;
            Config::default().save_to_path(&paths.config_file)?;
            Ok(format!("Wrote {}", paths.config_file.display()))
        },
    }
}

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, TasklinkError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "tasklink", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| TasklinkError::InvalidInput(format!("completion script is not UTF-8: {e}")))
}
