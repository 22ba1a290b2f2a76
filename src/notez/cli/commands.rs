//! # CLI Layer
//!
//! One client of the notez API. This is the only place that touches the
//! terminal, reads the environment, or decides where notes live on disk.
//!
//! - `run()`: parses arguments, sets up logging, dispatches
//! - `init_context()`: resolves the data directory, loads config, opens the store
//! - `handle_*()`: call one API method and print its result

use super::print::{write_config, write_messages, write_notes};
use super::prompt::prompt_yesno;
use super::setup::{Cli, Commands};
use super::shell::run_shell;
use clap::Parser;
use directories::ProjectDirs;
use log::{debug, warn};
use notez::api::{CmdMessage, CmdResult, ConfigAction, NotezApi, NotezPaths};
use notez::config::NotezConfig;
use notez::error::{NotezError, Result};
use notez::store::fs::FileStore;
use notez::store::DataStore;
use std::io::{self, Write};
use std::path::PathBuf;

const HOME_ENV: &str = "NOTEZ_HOME";
const LOG_ENV: &str = "NOTEZ_LOG";

struct AppContext {
    api: NotezApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { text }) => handle_add(&mut ctx, text),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Edit { index, text }) => handle_edit(&mut ctx, index, text),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Shell) => handle_shell(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Path) => handle_path(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, default))
        .format_timestamp(None)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "notez", "notez")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| NotezError::Config("Could not determine a data directory".into()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    debug!("data directory: {}", data_dir.display());

    let config = NotezConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!("ignoring unreadable config in {}: {}", data_dir.display(), e);
        NotezConfig::default()
    });

    let store = FileStore::new(data_dir.clone()).with_key(&config.storage_key);
    let api = NotezApi::initialize(store, config, NotezPaths::new(data_dir));

    if !api.startup_messages().is_empty() {
        write_messages(&mut io::stderr(), api.startup_messages())?;
    }

    Ok(AppContext { api })
}

fn print_messages(messages: &[CmdMessage]) -> Result<()> {
    write_messages(&mut io::stdout().lock(), messages)?;
    Ok(())
}

fn handle_add(ctx: &mut AppContext, text: Vec<String>) -> Result<()> {
    let result = ctx.api.add(&text.join(" "))?;
    if !result.dirty {
        return print_messages(&[CmdMessage::info("Nothing to add: the note is empty.")]);
    }
    print_messages(&result.messages)
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list();
    write_notes(
        &mut io::stdout().lock(),
        &result.listed_notes,
        ctx.api.session(),
    )?;
    print_messages(&result.messages)
}

fn handle_edit(ctx: &mut AppContext, index: String, text: Vec<String>) -> Result<()> {
    let result = ctx.api.edit_note(&index, &text.join(" "))?;
    if !result.dirty {
        // A blank draft leaves the session open; an unknown id never opens one.
        let message = if ctx.api.session().is_active() {
            CmdMessage::info("Nothing changed: the new text is empty.")
        } else {
            CmdMessage::info(format!("Nothing changed: no note {}.", index))
        };
        return print_messages(&[message]);
    }
    print_messages(&result.messages)
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_selected(&indexes)?;
    if result.affected_notes.is_empty() {
        return print_messages(&[CmdMessage::info("No matching notes.")]);
    }
    print_messages(&result.messages)
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if ctx.api.count() == 0 {
        return print_messages(&[CmdMessage::info("No notes to clear.")]);
    }

    let confirmed = yes || {
        let mut stdout = io::stdout().lock();
        prompt_yesno(&mut io::stdin().lock(), &mut stdout, "Delete all notes?")?
    };

    let result = ctx.api.clear_all(confirmed)?;
    if !result.dirty {
        return print_messages(&[CmdMessage::info("Cancelled.")]);
    }
    print_messages(&result.messages)
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let mut stdout = io::stdout().lock();
    run_shell(&mut ctx.api, &mut io::stdin().lock(), &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result: CmdResult = ctx.api.configure(action)?;
    if show_all {
        if let Some(config) = &result.config {
            write_config(&mut io::stdout().lock(), config)?;
        }
    }
    print_messages(&result.messages)
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.store().location());
    Ok(())
}
