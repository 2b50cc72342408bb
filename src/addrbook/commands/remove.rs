use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddrBookError, Result};

pub fn run(book: &mut AddressBook, names: &[String]) -> Result<CmdResult> {
    // resolve everything first so a typo removes nothing
    if let Some(missing) = names.iter().find(|n| book.find_record(n).is_none()) {
        return Err(AddrBookError::ContactNotFound(missing.clone()));
    }

    let mut result = CmdResult::default();
    for name in names {
        if let Some(record) = book.remove_record(name) {
            result.add_message(CmdMessage::success(format!("Contact removed: {}", name)));
            result.contacts.push(record);
            result.changed = true;
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn removes_contacts() {
        let mut book = BookFixture::new().with_sample_contacts().book;
        let result = run(&mut book, &["Andrew".into()]).unwrap();
        assert!(result.changed);
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["Olga"]);
    }

    #[test]
    fn unknown_name_removes_nothing() {
        let mut book = BookFixture::new().with_sample_contacts().book;
        let err = run(&mut book, &["Andrew".into(), "Nobody".into()]).unwrap_err();
        assert!(matches!(err, AddrBookError::ContactNotFound(_)));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn repeated_name_is_removed_once() {
        let mut book = BookFixture::new().with_sample_contacts().book;
        let result = run(&mut book, &["Olga".into(), "Olga".into()]).unwrap();
        assert_eq!(result.contacts.len(), 1);
    }
}
