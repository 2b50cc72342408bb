use crate::book::UpcomingBirthday;
use crate::config::AddrBookConfig;
use crate::model::Record;

pub mod add;
pub mod birthday;
pub mod config;
pub mod email;
pub mod helpers;
pub mod import;
pub mod list;
pub mod phone;
pub mod remove;
pub mod search;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of a command. Only the fields relevant to the command are filled in.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Contacts created, changed or requested for display
    pub contacts: Vec<Record>,
    /// Rendered listing pages
    pub pages: Vec<String>,
    /// Contact names matched by a search
    pub matches: Vec<String>,
    pub birthdays: Vec<UpcomingBirthday>,
    pub config: Option<AddrBookConfig>,
    pub messages: Vec<CmdMessage>,
    /// Whether the book was modified and needs saving
    pub changed: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_contacts(mut self, contacts: Vec<Record>) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn with_pages(mut self, pages: Vec<String>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_matches(mut self, matches: Vec<String>) -> Self {
        self.matches = matches;
        self
    }

    pub fn with_birthdays(mut self, birthdays: Vec<UpcomingBirthday>) -> Self {
        self.birthdays = birthdays;
        self
    }

    pub fn with_config(mut self, config: AddrBookConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn changed(mut self) -> Self {
        self.changed = true;
        self
    }
}
