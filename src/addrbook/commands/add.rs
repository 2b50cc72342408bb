use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContactDraft;

pub fn run(book: &mut AddressBook, draft: &ContactDraft) -> Result<CmdResult> {
    let record = draft.build()?;
    let name = record.name().to_string();
    let replaced = book.add_record(record.clone());

    let mut result = CmdResult::default().with_contacts(vec![record]).changed();
    if replaced.is_some() {
        result.add_message(CmdMessage::warning(format!(
            "Contact replaced: {}",
            name
        )));
    } else {
        result.add_message(CmdMessage::success(format!("Contact added: {}", name)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::AddrBookError;
    use crate::store::memory::fixtures::{andrew, BookFixture};

    #[test]
    fn adds_contact() {
        let mut book = AddressBook::new();
        let result = run(&mut book, &andrew()).unwrap();

        assert!(result.changed);
        assert_eq!(result.contacts[0].name(), "Andrew");
        assert_eq!(book.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn same_name_replaces_with_warning() {
        let mut book = BookFixture::new().with_sample_contacts().book;
        let result = run(&mut book, &ContactDraft::new("Andrew")).unwrap();

        assert_eq!(book.len(), 2);
        assert!(book.find_record("Andrew").unwrap().phones().is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn invalid_field_leaves_book_untouched() {
        let mut book = AddressBook::new();
        let mut draft = andrew();
        draft.phones.push("12345".into());

        let err = run(&mut book, &draft).unwrap_err();
        assert!(matches!(err, AddrBookError::Validation(_)));
        assert!(book.is_empty());
    }
}
