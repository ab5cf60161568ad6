use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "tasklink")]
#[command(about = "Turn markdown task lines into task-tracker drafts that link back to your notes")]
#[command(long_about = "tasklink - markdown tasks to tracker drafts

Reads checklist lines like `- [ ] Pay rent 📅 2023-02-01 ⏫` and extracts the
task text, wiki-links, dates and priority. Builds the task or project a
tracker client would create, with a deep link back to the note, and the
markdown that links the note line to the created task.

Nothing is sent anywhere: tasklink only prints.

QUICK START:
  tasklink parse \"- [ ] Call [[Mom]] ⏳ 2023-02-02 🔼\"
  tasklink task \"- [ ] Pay rent 📅 2023-02-01\" --file ~/Brain/Inbox.md
  tasklink link \"- [ ] Pay rent\" --url https://tracker.example/t/1

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the configured `general.default_output`.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the configuration file
    #[arg(long, global = true, env = "TASKLINK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse markdown lines
    ///
    /// Shows whether each line is a checklist task, its text without
    /// markup, wiki-links, dates and priority. Lines are read from stdin
    /// when none are given.
    ///
    /// # Examples
    ///
    ///   tasklink parse "- [x] Task test text"
    ///   tasklink parse "Task 🛫 2023-02-03 ⏳ 2023-02-02" -o json
    ///   grep -- '- \[ \]' Inbox.md | tasklink parse
    ///
    /// # Markers
    ///
    ///   Due:        📅 📆 🗓  YYYY-MM-DD
    ///   Scheduled:  ⏳ ⌛  YYYY-MM-DD
    ///   Start:      🛫  YYYY-MM-DD
    ///   Priority:   ⏫ high, 🔼 medium, 🔽 low
    #[command(alias = "p")]
    Parse {
        /// Lines to parse
        lines: Vec<String>,
    },

    /// Draft a tracker task from a note line
    ///
    /// The task content is the line without markup, markers or list
    /// bullets; wiki-links become links into the vault when the vault root
    /// is known. The description links back to the note.
    ///
    /// # Examples
    ///
    ///   tasklink task "- [ ] Pay rent 📅 2023-02-01 ⏫" --file Inbox.md
    ///   tasklink task --file ~/Brain/Inbox.md --line-number 12
    #[command(alias = "t")]
    Task(TaskArgs),

    /// Draft a tracker project named after a note
    ///
    /// # Examples
    ///
    ///   tasklink project --file "~/Brain/Projects/Roof Repair.md"
    Project(NoteArgs),

    /// Rewrite a line so its text links to a tracker URL
    ///
    /// # Examples
    ///
    ///   tasklink link "- [ ] Pay rent" --url https://tracker.example/t/1
    ///   → - [ ] [Pay rent](https://tracker.example/t/1)
    Link {
        /// The line to rewrite
        line: String,

        /// URL of the tracker task
        #[arg(long)]
        url: String,
    },

    /// Print a note with a tracker project link inserted
    ///
    /// The link goes below the first heading, or at the top when the note
    /// has none. The note file itself is not modified.
    ///
    /// # Examples
    ///
    ///   tasklink project-link --file Roof.md --url https://tracker.example/p/7
    ProjectLink {
        #[command(flatten)]
        note: NoteArgs,

        /// URL of the tracker project
        #[arg(long)]
        url: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   tasklink completions zsh > ~/.zsh/completions/_tasklink
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments identifying a note.
#[derive(Args, Clone)]
pub struct NoteArgs {
    /// Path to the note
    #[arg(long, short = 'f')]
    pub file: PathBuf,

    /// Vault name for deep links (overrides config)
    #[arg(long)]
    pub vault: Option<String>,

    /// Vault root directory for link resolution (overrides config)
    #[arg(long)]
    pub vault_root: Option<PathBuf>,
}

/// Arguments for drafting a task.
#[derive(Args, Clone)]
pub struct TaskArgs {
    /// The note line; read from the note with --line-number when omitted
    pub line: Option<String>,

    #[command(flatten)]
    pub note: NoteArgs,

    /// One-based line number of the task in the note
    ///
    /// Reads the line from the note and uses the heading above it as the
    /// task's section.
    #[arg(long, short = 'l')]
    pub line_number: Option<usize>,
}

/// Config subcommands.
#[derive(Subcommand, Clone, Copy)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file if none exists
    Init,
}
