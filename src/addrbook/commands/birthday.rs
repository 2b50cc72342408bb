use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use chrono::NaiveDate;

use super::helpers::contact_mut;

pub fn set(book: &mut AddressBook, name: &str, birthday: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    record.set_birthday(birthday)?;

    let mut result = CmdResult::default()
        .with_contacts(vec![record.clone()])
        .changed();
    result.add_message(CmdMessage::success(format!(
        "Birthday of {} set to {}",
        name, birthday
    )));
    Ok(result)
}

pub fn clear(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    let mut result = CmdResult::default();
    if record.clear_birthday().is_some() {
        result = result.with_contacts(vec![record.clone()]).changed();
        result.add_message(CmdMessage::success(format!(
            "Birthday of {} cleared",
            name
        )));
    } else {
        result.add_message(CmdMessage::info(format!("{} has no birthday set", name)));
    }
    Ok(result)
}

/// Contacts with a birthday in the next `within_days` days, counted from `today`.
pub fn upcoming(book: &AddressBook, today: NaiveDate, within_days: i64) -> Result<CmdResult> {
    let birthdays = book.upcoming_birthdays(today, within_days);
    let mut result = CmdResult::default();
    if birthdays.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No birthdays in the next {} days.",
            within_days
        )));
    }
    Ok(result.with_birthdays(birthdays))
}
