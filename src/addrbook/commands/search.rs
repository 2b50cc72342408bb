use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(book: &AddressBook, query: &str) -> Result<CmdResult> {
    Ok(CmdResult::default().with_matches(book.search(query)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn finds_by_email_fragment() {
        let book = BookFixture::new().with_sample_contacts().book;
        let result = run(&book, "yahoo").unwrap();
        assert_eq!(result.matches, vec!["Olga"]);
    }

    #[test]
    fn phone_match_is_case_sensitive_substring() {
        let book = BookFixture::new().with_sample_contacts().book;
        assert_eq!(run(&book, "380933").unwrap().matches, vec!["Olga"]);
        assert_eq!(
            run(&book, "3805").unwrap().matches,
            vec!["Andrew", "Olga"]
        );
    }

    #[test]
    fn no_match_is_empty() {
        let book = BookFixture::new().with_sample_contacts().book;
        assert!(run(&book, "zzz").unwrap().matches.is_empty());
    }
}
