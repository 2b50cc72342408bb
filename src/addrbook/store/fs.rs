use super::ContactStore;
use crate::error::{AddrBookError, Result};
use crate::snapshot::Snapshot;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "addressbook.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `dir/file_name`.
    pub fn in_dir(dir: &Path, file_name: &str) -> Self {
        Self::new(dir.join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AddrBookError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = format!(".addressbook-{}.tmp", Uuid::new_v4());
        match self.path.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl ContactStore for FileStore {
    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.ensure_parent()?;
        let content =
            serde_json::to_string_pretty(snapshot).map_err(AddrBookError::Serialization)?;

        let tmp = self.tmp_path();
        fs::write(&tmp, content).map_err(AddrBookError::Io)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(AddrBookError::Io(e));
        }
        debug!(path = %self.path.display(), contacts = snapshot.len(), "saved address book");
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved address book");
                return Ok(None);
            }
            Err(e) => return Err(AddrBookError::Io(e)),
        };
        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(AddrBookError::Serialization)?;
        debug!(path = %self.path.display(), contacts = snapshot.len(), "loaded address book");
        Ok(Some(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactDraft;
    use tempfile::TempDir;

    fn sample() -> Snapshot {
        let andrew = ContactDraft {
            name: "Andrew".into(),
            phones: vec!["380671234455".into(), "380503216677".into()],
            emails: vec!["andrew@gmail.com".into()],
            birthday: Some("18.08.2003".into()),
        }
        .build()
        .unwrap();
        let olga = ContactDraft {
            name: "Olga".into(),
            phones: vec!["380933458790".into()],
            emails: vec!["olga@gmail.com".into(), "olga@yahoo.com".into()],
            birthday: None,
        }
        .build()
        .unwrap();
        [andrew, olga].into_iter().collect()
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::in_dir(dir.path(), DEFAULT_DATA_FILE);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::in_dir(dir.path(), DEFAULT_DATA_FILE);
        store.save(&sample()).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn save_creates_parent_dir_and_leaves_no_tmp_files() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = FileStore::in_dir(&nested, "book.json");
        store.save(&sample()).unwrap();

        assert!(nested.join("book.json").exists());
        for entry in fs::read_dir(&nested).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DATA_FILE);
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.load(),
            Err(AddrBookError::Serialization(_))
        ));
    }

    #[test]
    fn tampered_phone_fails_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DATA_FILE);
        fs::write(
            &path,
            r#"{"Andrew": {"name": "Andrew", "phones": ["0671234455"], "emails": []}}"#,
        )
        .unwrap();

        let store = FileStore::new(&path);
        assert!(store.load().is_err());
    }
}
