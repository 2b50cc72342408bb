//! # CLI Layer
//!
//! This module is **one possible UI client** for addrbook; it is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Flow
//!
//! 1. Parse arguments and set up logging
//! 2. Resolve the home directory: `--home`, then `$ADDRBOOK_HOME`, then the user data dir
//! 3. Build an `AddrBookApi<FileStore>` from the config found there and load the book
//! 4. Call the API and render the `CmdResult`
//!
//! A book or config that exists but cannot be read aborts the command: the book is never
//! overwritten by an empty one, and a broken config never redirects it to the default file.

use super::logger::init_logger;
use super::render::{
    print_messages, render_birthdays, render_config, render_contacts, render_pages,
    render_search,
};
use super::setup::{BirthdayCommands, Cli, Commands, EmailCommands, PhoneCommands};
use addrbook::api::{AddrBookApi, CmdResult, ConfigAction};
use addrbook::config::AddrBookConfig;
use addrbook::error::{AddrBookError, Result};
use addrbook::model::{ContactDraft, Record};
use addrbook::store::fs::FileStore;
use chrono::Local;
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "ADDRBOOK_HOME";

struct AppContext {
    api: AddrBookApi<FileStore>,
    config: AddrBookConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let home = resolve_home(cli.home.as_deref())?;
    debug!(home = %home.display(), "using home directory");
    let mut ctx = init_context(home)?;

    // These only touch paths and config, so they work even when the book is unreadable.
    match &cli.command {
        Some(Commands::Path) => return handle_path(&ctx),
        Some(Commands::Config { key, value }) => {
            return handle_config(&ctx, key.clone(), value.clone())
        }
        _ => {}
    }

    ctx.api.open()?;

    match cli.command {
        Some(Commands::Add {
            name,
            phones,
            emails,
            birthday,
        }) => handle_add(
            &mut ctx,
            ContactDraft {
                name,
                phones,
                emails,
                birthday,
            },
        ),
        Some(Commands::Phone(cmd)) => {
            let result = match cmd {
                PhoneCommands::Add { name, phone } => ctx.api.add_phone(&name, &phone)?,
                PhoneCommands::Edit { name, old, new } => ctx.api.edit_phone(&name, &old, &new)?,
                PhoneCommands::Delete { name, phone } => ctx.api.delete_phone(&name, &phone)?,
            };
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Email(cmd)) => {
            let result = match cmd {
                EmailCommands::Add { name, email } => ctx.api.add_email(&name, &email)?,
                EmailCommands::Edit { name, old, new } => ctx.api.edit_email(&name, &old, &new)?,
                EmailCommands::Delete { name, email } => ctx.api.delete_email(&name, &email)?,
            };
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Birthday(cmd)) => {
            let result = match cmd {
                BirthdayCommands::Set { name, date } => ctx.api.set_birthday(&name, &date)?,
                BirthdayCommands::Clear { name } => ctx.api.clear_birthday(&name)?,
            };
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Show { names }) => handle_show(&ctx, &names),
        Some(Commands::List { page_size }) => handle_list(&ctx, page_size),
        Some(Commands::Search { query: Some(query) }) => handle_search(&ctx, &query),
        Some(Commands::Search { query: None }) => handle_interactive_search(&ctx),
        Some(Commands::Remove { names }) => {
            let result = ctx.api.remove_contacts(&names)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Import { file }) => {
            let result = ctx.api.import_file(&file)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Birthdays { days }) => handle_birthdays(&ctx, days),
        Some(Commands::Path) | Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&ctx, None),
    }
}

fn resolve_home(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "addrbook", "addrbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            AddrBookError::Api(format!(
                "Could not determine a home directory; pass --home or set {}",
                HOME_ENV
            ))
        })
}

/// Fails when `config.json` exists but cannot be read; defaults apply only when it is missing.
fn init_context(home: PathBuf) -> Result<AppContext> {
    let config = AddrBookConfig::load(&home).map_err(|e| {
        warn!(error = %e, "could not read config");
        e
    })?;
    let store = FileStore::in_dir(&home, &config.data_file);
    Ok(AppContext {
        api: AddrBookApi::new(store, home),
        config,
    })
}

fn handle_add(ctx: &mut AppContext, draft: ContactDraft) -> Result<()> {
    if draft.name.trim().is_empty() {
        return Err(AddrBookError::Api("Contact name cannot be empty".to_string()));
    }
    let result = ctx.api.add_contact(&draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, names: &[String]) -> Result<()> {
    let result = ctx.api.view_contacts(names)?;
    print!(
        "{}",
        render_contacts(&result.contacts, Local::now().date_naive())
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, page_size: Option<usize>) -> Result<()> {
    let result = ctx
        .api
        .list_contacts(page_size.unwrap_or(ctx.config.page_size))?;
    print!("{}", render_pages(&result.pages));
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: &str) -> Result<()> {
    let result = ctx.api.search(query)?;
    print!("{}", render_search(&matched_records(ctx, &result)));
    Ok(())
}

fn matched_records<'a>(ctx: &'a AppContext, result: &CmdResult) -> Vec<&'a Record> {
    result
        .matches
        .iter()
        .filter_map(|name| ctx.api.book().find_record(name))
        .collect()
}

/// Prompts for queries until an empty line. Piped input is read line by line instead.
fn handle_interactive_search(ctx: &AppContext) -> Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        for line in std::io::stdin().lock().lines() {
            let line = line?;
            let query = line.trim();
            if query.is_empty() {
                break;
            }
            handle_search(ctx, query)?;
        }
        return Ok(());
    }

    loop {
        term.write_str("Search (empty to quit): ")?;
        let line = term.read_line()?;
        let query = line.trim();
        if query.is_empty() {
            return Ok(());
        }
        handle_search(ctx, query)?;
    }
}

fn handle_birthdays(ctx: &AppContext, days: i64) -> Result<()> {
    let result = ctx.api.upcoming_birthdays(days)?;
    print!("{}", render_birthdays(&result.birthdays));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.store().path().display());
    Ok(())
}
