//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all address book operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the in-memory [`AddressBook`] and its [`ContactStore`]
//! - **Dispatches** to the appropriate command function
//! - **Persists** the book after every command that reports a change
//! - **Rolls back** the in-memory book when a command or its save fails
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## Loading
//!
//! [`AddrBookApi::open`] pulls the stored snapshot into memory. A store with nothing saved
//! leaves the book empty. A store that fails to load leaves the book exactly as it was and
//! returns the error, so callers can report it and decide whether to carry on.
//!
//! ## Generic Over ContactStore
//!
//! `AddrBookApi<S: ContactStore>` is generic over the storage backend:
//! - Production: `AddrBookApi<FileStore>`
//! - Testing: `AddrBookApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::model::ContactDraft;
use crate::store::ContactStore;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct AddrBookApi<S: ContactStore> {
    book: AddressBook,
    store: S,
    home: PathBuf,
}

impl<S: ContactStore> AddrBookApi<S> {
    /// Creates an API over an empty book. Call [`open`](Self::open) to load stored contacts.
    pub fn new(store: S, home: PathBuf) -> Self {
        Self {
            book: AddressBook::new(),
            store,
            home,
        }
    }

    pub fn open(&mut self) -> Result<()> {
        match self.store.load() {
            Ok(Some(snapshot)) => self.book.import_snapshot(snapshot)?,
            Ok(None) => debug!("no saved address book, starting empty"),
            Err(e) => {
                warn!(error = %e, "could not load address book");
                return Err(e);
            }
        }
        debug!(contacts = self.book.len(), "address book open");
        Ok(())
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn add_contact(&mut self, draft: &ContactDraft) -> Result<CmdResult> {
        self.mutate(|book| commands::add::run(book, draft))
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        self.mutate(|book| commands::phone::add(book, name, phone))
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        self.mutate(|book| commands::phone::edit(book, name, old, new))
    }

    pub fn delete_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        self.mutate(|book| commands::phone::delete(book, name, phone))
    }

    pub fn add_email(&mut self, name: &str, email: &str) -> Result<CmdResult> {
        self.mutate(|book| commands::email::add(book, name, email))
    }

    pub fn edit_email(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        self.mutate(|book| commands::email::edit(book, name, old, new))
    }

    pub fn delete_email(&mut self, name: &str, email: &str) -> Result<CmdResult> {
        self.mutate(|book| commands::email::delete(book, name, email))
    }

    pub fn set_birthday(&mut self, name: &str, birthday: &str) -> Result<CmdResult> {
        self.mutate(|book| commands::birthday::set(book, name, birthday))
    }

    pub fn clear_birthday(&mut self, name: &str) -> Result<CmdResult> {
        self.mutate(|book| commands::birthday::clear(book, name))
    }

    pub fn view_contacts(&self, names: &[String]) -> Result<CmdResult> {
        commands::view::run(&self.book, names)
    }

    pub fn list_contacts(&self, page_size: usize) -> Result<CmdResult> {
        commands::list::run(&self.book, page_size)
    }

    pub fn search(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.book, query)
    }

    pub fn remove_contacts(&mut self, names: &[String]) -> Result<CmdResult> {
        self.mutate(|book| commands::remove::run(book, names))
    }

    pub fn import_contacts(&mut self, drafts: &[ContactDraft]) -> Result<CmdResult> {
        self.mutate(|book| commands::import::run(book, drafts))
    }

    pub fn import_file(&mut self, path: &Path) -> Result<CmdResult> {
        let drafts = commands::import::read_drafts(path)?;
        self.import_contacts(&drafts)
    }

    pub fn upcoming_birthdays(&self, within_days: i64) -> Result<CmdResult> {
        self.upcoming_birthdays_from(Local::now().date_naive(), within_days)
    }

    pub fn upcoming_birthdays_from(&self, today: NaiveDate, within_days: i64) -> Result<CmdResult> {
        commands::birthday::upcoming(&self.book, today, within_days)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.home, action)
    }

    /// Runs a mutating command and saves when it reports a change. If the command or the
    /// save fails, the book is put back the way it was before the call.
    fn mutate<F>(&mut self, command: F) -> Result<CmdResult>
    where
        F: FnOnce(&mut AddressBook) -> Result<CmdResult>,
    {
        let before = self.book.clone();
        let outcome = command(&mut self.book).and_then(|result| {
            if result.changed {
                self.store.save(&self.book.export_snapshot())?;
            }
            Ok(result)
        });
        if let Err(e) = &outcome {
            debug!(error = %e, "command failed, restoring previous book");
            self.book = before;
        }
        outcome
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
