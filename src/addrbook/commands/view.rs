use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;

use super::helpers::contact;

pub fn run(book: &AddressBook, names: &[String]) -> Result<CmdResult> {
    let contacts = names
        .iter()
        .map(|name| contact(book, name).cloned())
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_contacts(contacts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddrBookError;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn views_in_requested_order() {
        let book = BookFixture::new().with_sample_contacts().book;
        let result = run(&book, &["Olga".into(), "Andrew".into()]).unwrap();
        let names: Vec<_> = result.contacts.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Olga", "Andrew"]);
    }

    #[test]
    fn unknown_name_fails_whole_view() {
        let book = BookFixture::new().with_sample_contacts().book;
        let err = run(&book, &["Olga".into(), "Nobody".into()]).unwrap_err();
        assert!(matches!(err, AddrBookError::ContactNotFound(n) if n == "Nobody"));
    }
}
