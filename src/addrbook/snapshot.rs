//! The unit of persistence: an ordered `name → Record` mapping.
//!
//! On disk a snapshot is a JSON object keyed by contact name. Entry order is kept in both
//! directions so a save/load cycle reproduces the listing order of the book.

use crate::model::Record;
use serde::de::{Error as _, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<(String, Record)>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. Callers are responsible for key uniqueness.
    pub fn push(&mut self, key: impl Into<String>, record: Record) {
        self.entries.push((key.into(), record));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }

    pub fn into_entries(self) -> Vec<(String, Record)> {
        self.entries
    }
}

impl FromIterator<Record> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|r| (r.name().to_string(), r))
                .collect(),
        }
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, record) in &self.entries {
            map.serialize_entry(key, record)?;
        }
        map.end()
    }
}

struct SnapshotVisitor;

impl<'de> Visitor<'de> for SnapshotVisitor {
    type Value = Snapshot;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of contact names to records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Snapshot, A::Error> {
        let mut seen = HashSet::new();
        let mut snapshot = Snapshot::new();
        while let Some((key, record)) = access.next_entry::<String, Record>()? {
            if !seen.insert(key.clone()) {
                return Err(A::Error::custom(format!("duplicate contact {key:?}")));
            }
            snapshot.push(key, record);
        }
        Ok(snapshot)
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SnapshotVisitor)
    }
}
