//! # CLI Layer
//!
//! One possible UI client for rollbook. This is the only place that:
//! - Parses arguments
//! - Reads stdin and writes stdout
//! - Installs the tracing subscriber
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves config and data file, builds the API
//! - `handle_*()`: Per-command handlers that call the API and print the result

use super::menu;
use super::print::{print_messages, print_report_cards, print_table};
use super::prompt::Prompter;
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use rollbook::api::{CmdResult, NewStudent, RollbookApi};
use rollbook::config::{RollbookConfig, CONFIG_FILENAME};
use rollbook::error::{Result, RollbookError};
use rollbook::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: RollbookApi<FileStore>,
    config: RollbookConfig,
    config_path: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let (config, config_path) = load_config(&cli)?;
    init_logging(cli.verbose, &config.log_level);

    let mut ctx = init_context(&cli, config, config_path);

    match cli.command {
        Some(Commands::Add {
            name,
            class,
            roll,
            marks,
            comment,
        }) => handle_add(&mut ctx, NewStudent::new(name, class, roll, marks).with_comment(comment)),
        Some(Commands::List { brief }) => {
            let result = ctx.api.list_students()?;
            show(&result, brief)
        }
        Some(Commands::Show { roll }) => {
            let result = ctx.api.view_student(roll)?;
            show(&result, false)
        }
        Some(Commands::Topper) => handle_topper(&ctx),
        Some(Commands::Sort) => {
            let result = ctx.api.sort_students()?;
            show(&result, true)
        }
        Some(Commands::Class { name, brief }) => {
            let result = ctx.api.class_students(&name)?;
            show(&result, brief)
        }
        Some(Commands::EditMarks { roll, marks }) => {
            let result = ctx.api.edit_marks(roll, marks)?;
            show(&result, true)
        }
        Some(Commands::Comment { roll, text }) => {
            let result = ctx.api.edit_comment(roll, text.join(" "))?;
            show(&result, true)
        }
        Some(Commands::Remove { roll }) => {
            let result = ctx.api.remove_students(roll)?;
            show(&result, true)
        }
        Some(Commands::Config {
            data_file,
            log_level,
        }) => handle_config(&mut ctx, data_file, log_level),
        Some(Commands::Menu) | None => handle_menu(&mut ctx),
    }
}

/// An explicit `--config` must load; the default location falls back to defaults.
fn load_config(cli: &Cli) -> Result<(RollbookConfig, Option<PathBuf>)> {
    if let Some(path) = &cli.config {
        let config = RollbookConfig::load_file(path)?;
        return Ok((config, Some(path.clone())));
    }

    match ProjectDirs::from("com", "rollbook", "rollbook") {
        Some(dirs) => {
            let dir = dirs.config_dir();
            let config = RollbookConfig::load(dir).unwrap_or_default();
            Ok((config, Some(dir.join(CONFIG_FILENAME))))
        }
        None => Ok((RollbookConfig::default(), None)),
    }
}

fn init_logging(verbose: bool, configured_level: &str) {
    let level = if verbose { "debug" } else { configured_level };
    let filter = EnvFilter::try_new(format!("rollbook={}", level))
        .unwrap_or_else(|_| EnvFilter::new("rollbook=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(
    cli: &Cli,
    config: RollbookConfig,
    config_path: Option<PathBuf>,
) -> AppContext {
    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_file.clone());
    debug!(path = %data_file.display(), "using data file");

    let api = RollbookApi::new(FileStore::new(data_file));
    AppContext {
        api,
        config,
        config_path,
    }
}

fn show(result: &CmdResult, brief: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if brief {
        print_table(&mut out, &result.listed_students)?;
        print_table(&mut out, &result.affected_students)?;
    } else {
        print_report_cards(&mut out, &result.listed_students)?;
        print_report_cards(&mut out, &result.affected_students)?;
    }
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_add(ctx: &mut AppContext, input: NewStudent) -> Result<()> {
    let result = ctx.api.add_student(input)?;
    show(&result, false)
}

fn handle_topper(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.topper()?;
    if !result.listed_students.is_empty() {
        println!("Class Topper:");
    }
    show(&result, false)
}

/// Prints the active settings. With `--data-file` or `--log-level`, writes them to the
/// config file first.
fn handle_config(
    ctx: &mut AppContext,
    data_file: Option<PathBuf>,
    log_level: Option<String>,
) -> Result<()> {
    if data_file.is_some() || log_level.is_some() {
        let path = ctx.config_path.clone().ok_or_else(|| {
            RollbookError::InvalidInput("no config location; pass --config".to_string())
        })?;
        if let Some(data_file) = data_file {
            ctx.config.data_file = data_file;
        }
        if let Some(log_level) = log_level {
            ctx.config.log_level = log_level;
        }
        ctx.config.save_file(&path)?;
        debug!(path = %path.display(), "saved config");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &ctx.config_path {
        Some(path) => writeln!(out, "config = {}", path.display())?,
        None => writeln!(out, "config = (none)")?,
    }
    writeln!(out, "data-file = {}", ctx.api.roster().store().path().display())?;
    writeln!(out, "configured-data-file = {}", ctx.config.data_file.display())?;
    writeln!(out, "log-level = {}", ctx.config.log_level)?;
    writeln!(out, "students = {}", ctx.api.roster().len())?;
    Ok(())
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    menu::run(&mut ctx.api, &mut prompter)
}
