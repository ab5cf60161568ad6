use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tasklink::cli::args::{Cli, Commands, OutputFormat};
use tasklink::cli::commands;
use tasklink::config::{ColorSetting, Config, Paths};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "tasklink=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TASKLINK_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = cli
        .config
        .clone()
        .map_or_else(Paths::default, Paths::for_config_file);
    let config = Config::load_from_path(&paths.config_file)?;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {},
    }
    let format = cli.output.unwrap_or(config.general.default_output);
    // Edited notes are printed byte for byte.
    let verbatim =
        format == OutputFormat::Pretty && matches!(cli.command, Commands::ProjectLink { .. });

    let output = match cli.command {
        Commands::Parse { lines } => {
            let stdin = std::io::stdin();
            commands::parse(&lines, stdin.lock(), format)?
        },
        Commands::Task(args) => {
            let file = args.note.file.display().to_string();
            commands::task(&config, args, format).with_context(|| format!("drafting task from {file}"))?
        },
        Commands::Project(args) => commands::project(&config, &args, format)?,
        Commands::Link { line, url } => commands::link(&line, &url, format)?,
        Commands::ProjectLink { note, url } => commands::project_link(&config, &note, &url, format)
            .with_context(|| format!("linking project in {}", note.file.display()))?,
        Commands::Config { command } => commands::config(&config, &paths, command, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if verbatim {
        print!("{output}");
    } else if !output.is_empty() {
        println!("{}", output.trim_end_matches('\n'));
    }
    Ok(())
}
