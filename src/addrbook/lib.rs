//! # Addrbook Architecture
//!
//! Addrbook is a **UI-agnostic contact book library**. The `addrbook` binary is one client
//! of it; nothing below the CLI knows about terminals.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders contacts, handles terminal I/O │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the AddressBook and its store                       │
//! │  - Dispatches to commands, saves after changes              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Operates on &mut AddressBook, returns CmdResult          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (field.rs, model.rs, book.rs, snapshot.rs)            │
//! │  - Validated fields, Record, AddressBook, Snapshot          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContactStore trait                                       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Absence Is Not an Error
//!
//! Looking up a missing contact, phone or email, asking for the birthday countdown of a
//! contact without a birthday, and loading a book that was never saved all yield `None`.
//! Errors are reserved for bad input ([`error::ValidationError`]) and real failures
//! (I/O, corrupt files).
//!
//! ## Testing Strategy
//!
//! 1. **Core** (`field.rs`, `model.rs`, `book.rs`): invariants and edge cases.
//! 2. **Commands** (`commands/*.rs`): business logic against fixture books.
//! 3. **API** (`api.rs`): load/save behaviour against `InMemoryStore`.
//! 4. **CLI** (`tests/`): the binary end to end in a temp home directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`field`]: Validated single-value fields (`Name`, `Email`, `Phone`, `Birthday`)
//! - [`model`]: `Record` and raw `ContactDraft` input
//! - [`book`]: `AddressBook`: storage, paging, search
//! - [`snapshot`]: the ordered mapping that gets persisted
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod field;
pub mod model;
pub mod snapshot;
pub mod store;
