//! # Address Book
//!
//! [`AddressBook`] maps contact names to [`Record`]s. Every record is stored under its own
//! name, so `find_record(r.name())` always returns `r`; adding a record whose name already
//! exists replaces the old one in place.
//!
//! Entries keep their insertion order, which drives listing, search results and the
//! persisted snapshot. Lookups are linear: the book targets personal-sized collections.
//!
//! ## Paging
//!
//! [`AddressBook::iterate`] returns a lazy [`Pages`] iterator that borrows the book, so the
//! book cannot be mutated while a listing is in progress. Calling `iterate` again starts a
//! fresh listing from the first record.

use crate::error::{AddrBookError, Result};
use crate::model::Record;
use crate::snapshot::Snapshot;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::slice::Chunks;
use tracing::debug;

/// Separator between record summaries inside one page.
///
/// Every page uses it, the shorter final page included, so a page never spans lines.
pub const PAGE_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

/// A contact whose next birthday falls inside a queried window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub days: i64,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stores `record` under its name, returning the record it replaced, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name()) {
            Some(idx) => {
                debug!(name = record.name(), "replacing contact");
                Some(std::mem::replace(&mut self.records[idx], record))
            }
            None => {
                debug!(name = record.name(), "adding contact");
                self.records.push(record);
                None
            }
        }
    }

    pub fn find_record(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn find_record_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    pub fn remove_record(&mut self, name: &str) -> Option<Record> {
        let idx = self.position(name)?;
        debug!(name, "removing contact");
        Some(self.records.remove(idx))
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(Record::name)
    }

    /// Pages of at most `page_size` record summaries, in insertion order.
    ///
    /// The last page may be shorter. A zero page size is rejected.
    pub fn iterate(&self, page_size: usize) -> Result<Pages<'_>> {
        if page_size == 0 {
            return Err(AddrBookError::InvalidPageSize(page_size));
        }
        Ok(Pages {
            chunks: self.records.chunks(page_size),
        })
    }

    /// Names of contacts matching `query`, each at most once, in insertion order.
    ///
    /// Names and emails match case-insensitively, phones case-sensitively. An empty query
    /// matches every contact.
    pub fn search(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.name().to_lowercase().contains(&needle)
                    || r.emails()
                        .iter()
                        .any(|e| e.as_str().to_lowercase().contains(&needle))
                    || r.phones().iter().any(|p| p.as_str().contains(query))
            })
            .map(|r| r.name().to_string())
            .collect()
    }

    /// Contacts whose next birthday is at most `within_days` days after `today`,
    /// soonest first.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<_> = self
            .records
            .iter()
            .filter_map(|r| {
                let days = r.days_until_birthday_from(today)?;
                (days <= within_days).then(|| UpcomingBirthday {
                    name: r.name().to_string(),
                    days,
                })
            })
            .collect();
        // stable: ties keep insertion order
        upcoming.sort_by_key(|u| u.days);
        upcoming
    }

    /// Copies the full mapping out for the storage layer.
    pub fn export_snapshot(&self) -> Snapshot {
        self.records.iter().cloned().collect()
    }

    /// Replaces the whole book with `snapshot`.
    ///
    /// Fails without touching the current contents if a key differs from its record's
    /// name or appears twice.
    pub fn import_snapshot(&mut self, snapshot: Snapshot) -> Result<()> {
        let mut seen = HashSet::new();
        for (key, record) in snapshot.iter() {
            if key != record.name() {
                return Err(AddrBookError::Store(format!(
                    "Snapshot key {:?} does not match contact name {:?}",
                    key,
                    record.name()
                )));
            }
            if !seen.insert(key) {
                return Err(AddrBookError::Store(format!(
                    "Snapshot lists contact {:?} twice",
                    key
                )));
            }
        }
        self.records = snapshot
            .into_entries()
            .into_iter()
            .map(|(_, record)| record)
            .collect();
        debug!(contacts = self.records.len(), "imported snapshot");
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}

/// Lazy page listing produced by [`AddressBook::iterate`].
pub struct Pages<'a> {
    chunks: Chunks<'a, Record>,
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let chunk = self.chunks.next()?;
        Some(
            chunk
                .iter()
                .map(Record::to_string)
                .collect::<Vec<_>>()
                .join(PAGE_SEPARATOR),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}
