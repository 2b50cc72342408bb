use crate::book::AddressBook;
use crate::error::{AddrBookError, Result};
use crate::model::Record;

pub fn contact<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find_record(name)
        .ok_or_else(|| AddrBookError::ContactNotFound(name.to_string()))
}

pub fn contact_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_record_mut(name)
        .ok_or_else(|| AddrBookError::ContactNotFound(name.to_string()))
}

/// 0-based list position as shown to users.
pub fn ordinal(index: usize) -> usize {
    index + 1
}
