use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook, page_size: usize) -> Result<CmdResult> {
    let pages: Vec<String> = book.iterate(page_size)?.collect();
    let mut result = CmdResult::default();
    if pages.is_empty() {
        result.add_message(CmdMessage::info("Address book is empty."));
    }
    Ok(result.with_pages(pages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddrBookError;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn lists_pages() {
        let book = BookFixture::new().with_contacts(5).book;
        let result = run(&book, 2).unwrap();
        assert_eq!(result.pages.len(), 3);
        assert!(result.pages[2].starts_with("Name: Contact 5"));
    }

    #[test]
    fn empty_book_reports_it() {
        let book = BookFixture::new().book;
        let result = run(&book, 2).unwrap();
        assert!(result.pages.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn zero_page_size_is_error() {
        let book = BookFixture::new().with_contacts(1).book;
        assert!(matches!(
            run(&book, 0),
            Err(AddrBookError::InvalidPageSize(0))
        ));
    }
}
