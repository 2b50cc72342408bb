use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::{contact_mut, ordinal};

pub fn add(book: &mut AddressBook, name: &str, email: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    let mut result = CmdResult::default();
    if record.add_email(email)? {
        result = result.with_contacts(vec![record.clone()]).changed();
        result.add_message(CmdMessage::success(format!(
            "Email {} added to {}",
            email, name
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} already has email {}",
            name, email
        )));
    }
    Ok(result)
}

pub fn edit(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    let mut result = CmdResult::default();
    match record.edit_email(old, new)? {
        Some(index) => {
            result = result.with_contacts(vec![record.clone()]).changed();
            result.add_message(CmdMessage::success(format!(
                "Email #{} of {} changed: {} -> {}",
                ordinal(index),
                name,
                old,
                new
            )));
        }
        None => result.add_message(CmdMessage::warning(format!(
            "{} has no email {}",
            name, old
        ))),
    }
    Ok(result)
}

pub fn delete(book: &mut AddressBook, name: &str, old: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    let mut result = CmdResult::default();
    match record.delete_email(old) {
        Some(index) => {
            result = result.with_contacts(vec![record.clone()]).changed();
            result.add_message(CmdMessage::success(format!(
                "Email #{} of {} deleted: {}",
                ordinal(index),
                name,
                old
            )));
        }
        None => result.add_message(CmdMessage::warning(format!(
            "{} has no email {}",
            name, old
        ))),
    }
    Ok(result)
}
