use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddrBookError, Result};
use crate::model::ContactDraft;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Reads a JSON array of contact drafts.
pub fn read_drafts(path: &Path) -> Result<Vec<ContactDraft>> {
    let content = fs::read_to_string(path).map_err(AddrBookError::Io)?;
    serde_json::from_str(&content).map_err(AddrBookError::Serialization)
}

/// Adds each draft on its own: a bad field in one contact is reported and skipped,
/// the others are still added.
pub fn run(book: &mut AddressBook, drafts: &[ContactDraft]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut failed = 0;

    for draft in drafts {
        match draft.build() {
            Ok(record) => {
                let replaced = book.add_record(record.clone()).is_some();
                let verb = if replaced { "Replaced" } else { "Imported" };
                result.add_message(CmdMessage::success(format!("{}: {}", verb, draft.name)));
                result.contacts.push(record);
            }
            Err(e) => {
                warn!(name = %draft.name, error = %e, "skipping contact");
                result.add_message(CmdMessage::error(format!("Skipped {}: {}", draft.name, e)));
                failed += 1;
            }
        }
    }

    result.changed = !result.contacts.is_empty();
    let summary = format!(
        "{} imported, {} skipped",
        result.contacts.len(),
        failed
    );
    result.add_message(if failed == 0 {
        CmdMessage::info(summary)
    } else {
        CmdMessage::warning(summary)
    });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{andrew, olga};
    use tempfile::TempDir;

    fn sergii_with_bad_phone() -> ContactDraft {
        ContactDraft {
            name: "Sergii".into(),
            phones: vec!["380673451270".into(), "0502321517".into()],
            emails: vec!["sergii@gmail.com".into()],
            birthday: Some("21.07.1999".into()),
        }
    }

    #[test]
    fn bad_contact_does_not_stop_the_batch() {
        let mut book = AddressBook::new();
        let drafts = vec![andrew(), sergii_with_bad_phone(), olga()];

        let result = run(&mut book, &drafts).unwrap();

        assert_eq!(book.names().collect::<Vec<_>>(), vec!["Andrew", "Olga"]);
        assert!(result.changed);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("Skipped Sergii") && m.content.contains("0502321517")));
        assert_eq!(
            result.messages.last().unwrap().content,
            "2 imported, 1 skipped"
        );
    }

    #[test]
    fn all_bad_is_not_a_change() {
        let mut book = AddressBook::new();
        let result = run(&mut book, &[sergii_with_bad_phone()]).unwrap();
        assert!(!result.changed);
        assert!(book.is_empty());
    }

    #[test]
    fn reads_drafts_with_optional_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(
            &path,
            r#"[
                {"name": "Oleg", "phones": ["380938761535"], "birthday": "17.02.2004"},
                {"name": "Mia"}
            ]"#,
        )
        .unwrap();

        let drafts = read_drafts(&path).unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].birthday.as_deref(), Some("17.02.2004"));
        assert!(drafts[1].phones.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_drafts(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, AddrBookError::Io(_)));
    }
}
