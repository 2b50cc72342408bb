use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::{contact_mut, ordinal};

pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    if !record.add_phone(phone)? {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "{} already has phone {}",
            name, phone
        )));
        return Ok(result);
    }

    let mut result = CmdResult::default()
        .with_contacts(vec![record.clone()])
        .changed();
    result.add_message(CmdMessage::success(format!(
        "Phone {} added to {}",
        phone, name
    )));
    Ok(result)
}

pub fn edit(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    match record.edit_phone(old, new)? {
        Some(index) => {
            let mut result = CmdResult::default()
                .with_contacts(vec![record.clone()])
                .changed();
            result.add_message(CmdMessage::success(format!(
                "Phone #{} of {} changed: {} -> {}",
                ordinal(index),
                name,
                old,
                new
            )));
            Ok(result)
        }
        None => Ok(not_found(name, old)),
    }
}

pub fn delete(book: &mut AddressBook, name: &str, old: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    match record.delete_phone(old) {
        Some(index) => {
            let mut result = CmdResult::default()
                .with_contacts(vec![record.clone()])
                .changed();
            result.add_message(CmdMessage::success(format!(
                "Phone #{} of {} deleted: {}",
                ordinal(index),
                name,
                old
            )));
            Ok(result)
        }
        None => Ok(not_found(name, old)),
    }
}

fn not_found(name: &str, phone: &str) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::warning(format!(
        "{} has no phone {}",
        name, phone
    )));
    result
}
