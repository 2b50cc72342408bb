use super::ContactStore;
use crate::error::{AddrBookError, Result};
use crate::snapshot::Snapshot;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<Snapshot>,
    fail_load: bool,
    fail_save: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            saved: Some(snapshot),
            ..Self::default()
        }
    }

    /// Makes every subsequent `load` fail, standing in for an unreadable file.
    pub fn failing_load(mut self) -> Self {
        self.fail_load = true;
        self
    }

    /// Makes every subsequent `save` fail, standing in for a full or read-only disk.
    pub fn failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }

    pub fn saved(&self) -> Option<&Snapshot> {
        self.saved.as_ref()
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ContactStore for InMemoryStore {
    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        if self.fail_save {
            return Err(AddrBookError::Store("simulated save failure".to_string()));
        }
        self.saved = Some(snapshot.clone());
        self.saves += 1;
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>> {
        if self.fail_load {
            return Err(AddrBookError::Store("simulated load failure".to_string()));
        }
        Ok(self.saved.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::book::AddressBook;
    use crate::model::{ContactDraft, Record};

    pub fn andrew() -> ContactDraft {
        ContactDraft {
            name: "Andrew".into(),
            phones: vec!["380671234455".into(), "380503216677".into()],
            emails: vec!["andrew@gmail.com".into()],
            birthday: Some("18.08.2003".into()),
        }
    }

    pub fn olga() -> ContactDraft {
        ContactDraft {
            name: "Olga".into(),
            phones: vec!["380933458790".into(), "380507778899".into()],
            emails: vec!["olga@gmail.com".into(), "olga@yahoo.com".into()],
            birthday: None,
        }
    }

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_draft(mut self, draft: ContactDraft) -> Self {
            self.book.add_record(draft.build().unwrap());
            self
        }

        /// Andrew and Olga, in that order.
        pub fn with_sample_contacts(self) -> Self {
            self.with_draft(andrew()).with_draft(olga())
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                self.book.add_record(Record::named(format!("Contact {}", i + 1)));
            }
            self
        }

        pub fn into_store(self) -> InMemoryStore {
            InMemoryStore::with_snapshot(self.book.export_snapshot())
        }
    }
}
