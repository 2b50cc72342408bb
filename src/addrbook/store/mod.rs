//! # Storage Layer
//!
//! The address book itself never touches the filesystem. Persistence goes through the
//! [`ContactStore`] trait, which moves a whole [`Snapshot`] in or out at once.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - One pretty-printed JSON file (`addressbook.json` by default)
//!   - Writes land in a temp file first and are renamed over the target, so a crash
//!     never leaves a half-written book behind
//!
//! - [`memory::InMemoryStore`]: in-memory storage for tests
//!   - No persistence
//!   - Can be primed with a snapshot or told to fail on load
//!
//! ## Contract
//!
//! - `load` returns `Ok(None)` when nothing has been saved yet. Callers treat that as an
//!   empty book, not an error.
//! - Any other failure is an `Err`; the in-memory book must be left as it was.

use crate::error::Result;
use crate::snapshot::Snapshot;

pub mod fs;
pub mod memory;

/// Abstract interface for address book persistence.
pub trait ContactStore {
    /// Persist the full mapping, replacing whatever was stored before.
    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;

    /// Read the stored mapping, or `None` if nothing has been stored.
    fn load(&self) -> Result<Option<Snapshot>>;
}
