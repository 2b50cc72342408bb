use crate::error::ValidationError;
use crate::field::{Birthday, Email, Field, FieldFormat, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, de-duplicated phone and email lists, and an optional birthday.
///
/// Phones and emails are only mutated through the methods below, which keep each list
/// free of repeated values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    emails: Vec<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

// Deserialization target; funnels persisted data back through `Record::new`.
#[derive(Deserialize)]
struct RawRecord {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    emails: Vec<Email>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Record::new(raw.name, raw.phones, raw.emails, raw.birthday)
    }
}

impl Record {
    /// Builds a record. Repeated phones/emails keep their first occurrence, unset fields are
    /// dropped, and an unset birthday is stored as no birthday.
    pub fn new(
        name: Name,
        phones: Vec<Phone>,
        emails: Vec<Email>,
        birthday: Option<Birthday>,
    ) -> Self {
        let mut record = Self {
            name,
            phones: Vec::with_capacity(phones.len()),
            emails: Vec::with_capacity(emails.len()),
            birthday: birthday.filter(|b| b.is_set()),
        };
        for phone in phones.into_iter().filter(|p| p.is_set()) {
            push_unique(&mut record.phones, phone);
        }
        for email in emails.into_iter().filter(|e| e.is_set()) {
            push_unique(&mut record.emails, email);
        }
        record
    }

    /// A record with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Name::plain(name), Vec::new(), Vec::new(), None)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Appends a phone. Returns `Ok(false)` when the value is already present.
    pub fn add_phone(&mut self, raw: &str) -> Result<bool, ValidationError> {
        Ok(push_unique(&mut self.phones, Phone::new(raw)?))
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.get() == Some(value))
    }

    /// Replaces the phone `old` with `new` in place and returns its index, or `Ok(None)`
    /// when `old` is not present.
    ///
    /// If `new` is already listed elsewhere the `old` entry is simply removed so the list
    /// keeps a single copy of `new`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<Option<usize>, ValidationError> {
        replace_value(&mut self.phones, old, new)
    }

    /// Removes the phone `old` and returns the index it occupied.
    pub fn delete_phone(&mut self, old: &str) -> Option<usize> {
        remove_value(&mut self.phones, old)
    }

    pub fn add_email(&mut self, raw: &str) -> Result<bool, ValidationError> {
        Ok(push_unique(&mut self.emails, Email::new(raw)?))
    }

    pub fn find_email(&self, value: &str) -> Option<&Email> {
        self.emails.iter().find(|e| e.get() == Some(value))
    }

    pub fn edit_email(&mut self, old: &str, new: &str) -> Result<Option<usize>, ValidationError> {
        replace_value(&mut self.emails, old, new)
    }

    pub fn delete_email(&mut self, old: &str) -> Option<usize> {
        remove_value(&mut self.emails, old)
    }

    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    pub fn clear_birthday(&mut self) -> Option<Birthday> {
        self.birthday.take()
    }

    pub fn birthday_date(&self) -> Option<NaiveDate> {
        self.birthday.as_ref().and_then(|b| b.date())
    }

    /// Days from today (local calendar) until the next birthday; `None` when no birthday is set.
    pub fn days_until_birthday(&self) -> Option<i64> {
        self.days_until_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday. `0` means today.
    pub fn days_until_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let born = self.birthday_date()?;
        let mut next = anniversary(born, today.year())?;
        if next < today {
            next = anniversary(born, today.year() + 1)?;
        }
        Some((next - today).num_days())
    }
}

/// The birthday moved into `year`. Feb 29 falls on Mar 1 in non-leap years.
fn anniversary(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    born.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

fn push_unique<F>(list: &mut Vec<Field<F>>, field: Field<F>) -> bool
where
    F: FieldFormat + PartialEq,
{
    if list.contains(&field) {
        return false;
    }
    list.push(field);
    true
}

fn position_of<F: FieldFormat>(list: &[Field<F>], value: &str) -> Option<usize> {
    list.iter().position(|f| f.get() == Some(value))
}

fn replace_value<F>(
    list: &mut Vec<Field<F>>,
    old: &str,
    new: &str,
) -> Result<Option<usize>, ValidationError>
where
    F: FieldFormat,
{
    let Some(index) = position_of(list, old) else {
        return Ok(None);
    };
    let replacement = Field::<F>::new(new)?;
    let existing = position_of(list, new).filter(|&i| i != index);
    list[index] = replacement;
    match existing {
        // the other copy goes; the edited slot shifts left if it sat after it
        Some(other) => {
            list.remove(other);
            Ok(Some(if other < index { index - 1 } else { index }))
        }
        None => Ok(Some(index)),
    }
}

fn remove_value<F: FieldFormat>(list: &mut Vec<Field<F>>, old: &str) -> Option<usize> {
    let index = position_of(list, old)?;
    list.remove(index);
    Some(index)
}

fn join_values<F: FieldFormat>(fields: &[Field<F>]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Record {
    pub fn phones_joined(&self) -> String {
        join_values(&self.phones)
    }

    pub fn emails_joined(&self) -> String {
        join_values(&self.emails)
    }
}

/// Single-line summary used by paginated listings.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = self
            .birthday
            .as_ref()
            .and_then(|b| b.get())
            .unwrap_or("N/A");
        write!(
            f,
            "Name: {}, Phones: {}, Emails: {}, Birthday: {}",
            self.name(),
            self.phones_joined(),
            self.emails_joined(),
            birthday
        )
    }
}

/// Raw, unvalidated contact input, as typed on the command line or read from an import file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub birthday: Option<String>,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Validates every field and assembles the record. The first bad field aborts this draft only.
    pub fn build(&self) -> Result<Record, ValidationError> {
        let name = Name::new(self.name.clone())?;
        let phones = self
            .phones
            .iter()
            .map(|p| Phone::new(p.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        let emails = self
            .emails
            .iter()
            .map(|e| Email::new(e.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        let birthday = self
            .birthday
            .as_deref()
            .map(|b| Birthday::new(b))
            .transpose()?;
        Ok(Record::new(name, phones, emails, birthday))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn andrew() -> Record {
        ContactDraft {
            name: "Andrew".into(),
            phones: vec!["380671234455".into(), "380503216677".into()],
            emails: vec!["andrew@gmail.com".into()],
            birthday: Some("18.08.2003".into()),
        }
        .build()
        .unwrap()
    }

    fn phone_values(record: &Record) -> Vec<&str> {
        record.phones().iter().map(|p| p.as_str()).collect()
    }

    #[test]
    fn add_phone_ignores_duplicates() {
        let mut record = Record::named("Olga");
        assert!(record.add_phone("380933458790").unwrap());
        assert!(!record.add_phone("380933458790").unwrap());
        assert_eq!(phone_values(&record), vec!["380933458790"]);
    }

    #[test]
    fn add_phone_propagates_validation_error() {
        let mut record = Record::named("Olga");
        let err = record.add_phone("0933458790").unwrap_err();
        assert_eq!(err.kind, FieldKind::Phone);
        assert!(record.phones().is_empty());
    }

    #[test]
    fn new_keeps_first_of_repeated_values() {
        let record = ContactDraft {
            name: "Oleg".into(),
            phones: vec![
                "380938761535".into(),
                "380502329870".into(),
                "380938761535".into(),
            ],
            emails: vec!["oleg@gmail.com".into(), "oleg@gmail.com".into()],
            birthday: None,
        }
        .build()
        .unwrap();
        assert_eq!(phone_values(&record), vec!["380938761535", "380502329870"]);
        assert_eq!(record.emails().len(), 1);
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut record = andrew();
        let idx = record.edit_phone("380503216677", "380500000000").unwrap();
        assert_eq!(idx, Some(1));
        assert_eq!(phone_values(&record), vec!["380671234455", "380500000000"]);
    }

    #[test]
    fn edit_phone_missing_is_sentinel() {
        let mut record = andrew();
        assert_eq!(record.edit_phone("380000000000", "380500000000").unwrap(), None);
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn edit_phone_validates_new_value() {
        let mut record = andrew();
        assert!(record.edit_phone("380503216677", "bad").is_err());
        assert_eq!(phone_values(&record), vec!["380671234455", "380503216677"]);
    }

    #[test]
    fn edit_phone_onto_existing_value_merges() {
        let mut record = andrew();
        let idx = record.edit_phone("380671234455", "380503216677").unwrap();
        assert_eq!(idx, Some(0));
        assert_eq!(record.phones()[0].get(), Some("380503216677"));
        assert_eq!(phone_values(&record), vec!["380503216677"]);
    }

    #[test]
    fn edit_onto_later_value_keeps_edited_position() {
        let mut record = Record::named("Ivan");
        for phone in ["111111111111", "222222222222", "333333333333"] {
            record.add_phone(phone).unwrap();
        }

        let idx = record
            .edit_phone("111111111111", "333333333333")
            .unwrap()
            .unwrap();

        assert_eq!(record.phones()[idx].get(), Some("333333333333"));
        assert_eq!(
            phone_values(&record),
            vec!["333333333333", "222222222222"]
        );
    }

    #[test]
    fn edit_onto_earlier_value_returns_shifted_index() {
        let mut record = Record::named("Ivan");
        for email in ["a@x.com", "b@x.com", "c@x.com"] {
            record.add_email(email).unwrap();
        }

        let idx = record.edit_email("c@x.com", "a@x.com").unwrap();

        assert_eq!(idx, Some(1));
        assert_eq!(record.emails()[1].get(), Some("a@x.com"));
        assert_eq!(record.emails_joined(), "b@x.com, a@x.com");
    }

    #[test]
    fn delete_phone_returns_prior_index() {
        let mut record = andrew();
        assert_eq!(record.delete_phone("380503216677"), Some(1));
        assert_eq!(record.delete_phone("380503216677"), None);
        assert_eq!(phone_values(&record), vec!["380671234455"]);
    }

    #[test]
    fn find_phone_returns_field() {
        let record = andrew();
        let found = record.find_phone("380671234455").unwrap();
        assert_eq!(found.get(), Some("380671234455"));
        assert!(record.find_phone("380000000000").is_none());
    }

    #[test]
    fn email_operations_mirror_phones() {
        let mut record = andrew();
        assert!(record.add_email("andrew@work.com").unwrap());
        assert!(!record.add_email("andrew@gmail.com").unwrap());
        assert_eq!(
            record.edit_email("andrew@work.com", "andrew@home.com").unwrap(),
            Some(1)
        );
        assert!(record.find_email("andrew@home.com").is_some());
        assert_eq!(record.delete_email("andrew@gmail.com"), Some(0));
        assert_eq!(record.emails_joined(), "andrew@home.com");
    }

    #[test]
    fn days_until_birthday_without_birthday_is_none() {
        let record = Record::named("Olga");
        assert_eq!(record.days_until_birthday_from(date(2024, 1, 1)), None);
        assert_eq!(record.days_until_birthday(), None);
    }

    #[test]
    fn days_until_birthday_later_this_year() {
        let record = andrew();
        assert_eq!(record.days_until_birthday_from(date(2024, 8, 1)), Some(17));
    }

    #[test]
    fn days_until_birthday_today_is_zero() {
        let record = andrew();
        assert_eq!(record.days_until_birthday_from(date(2024, 8, 18)), Some(0));
    }

    #[test]
    fn days_until_birthday_rolls_to_next_year() {
        let record = andrew();
        // 2024-08-19 -> 2025-08-18
        assert_eq!(record.days_until_birthday_from(date(2024, 8, 19)), Some(364));
        // 2023-08-19 -> 2024-08-18 spans Feb 29
        assert_eq!(record.days_until_birthday_from(date(2023, 8, 19)), Some(365));
    }

    #[test]
    fn leap_day_birthday_in_common_year() {
        let mut record = Record::named("Leap");
        record.set_birthday("29.02.2004").unwrap();
        assert_eq!(record.days_until_birthday_from(date(2025, 2, 28)), Some(1));
        assert_eq!(record.days_until_birthday_from(date(2024, 2, 29)), Some(0));
    }

    #[test]
    fn days_until_birthday_stays_in_range() {
        let record = andrew();
        let mut day = date(2023, 1, 1);
        while day < date(2025, 1, 1) {
            let days = record.days_until_birthday_from(day).unwrap();
            assert!((0..=365).contains(&days), "{day}: {days}");
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn set_birthday_rejects_bad_dates_and_keeps_old() {
        let mut record = andrew();
        assert!(record.set_birthday("31.02.2003").is_err());
        assert_eq!(record.birthday_date(), Some(date(2003, 8, 18)));
        assert!(record.clear_birthday().is_some());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn summary_line_format() {
        assert_eq!(
            andrew().to_string(),
            "Name: Andrew, Phones: 380671234455, 380503216677, Emails: andrew@gmail.com, Birthday: 18.08.2003"
        );
        assert_eq!(
            Record::named("Olga").to_string(),
            "Name: Olga, Phones: , Emails: , Birthday: N/A"
        );
    }

    #[test]
    fn draft_build_reports_first_bad_field() {
        let draft = ContactDraft {
            name: "Sergii".into(),
            phones: vec!["380673451270".into(), "0502321517".into()],
            emails: vec![],
            birthday: Some("21.07.1999".into()),
        };
        let err = draft.build().unwrap_err();
        assert_eq!(err.value, "0502321517");
    }

    #[test]
    fn serde_roundtrip_keeps_order_and_birthday() {
        let record = andrew();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);

        let olga = Record::named("Olga");
        let json = serde_json::to_string(&olga).unwrap();
        assert!(!json.contains("birthday"));
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert!(parsed.birthday().is_none());
    }
}
