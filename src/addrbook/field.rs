//! # Validated Fields
//!
//! Every piece of contact data lives in a [`Field`]: a single optional string value whose
//! shape is checked by the field's [`FieldFormat`] on every assignment.
//!
//! The four concrete field types are aliases over the generic holder:
//!
//! | Alias        | Accepted values                                |
//! |--------------|------------------------------------------------|
//! | [`Name`]     | anything                                       |
//! | [`Email`]    | anything                                       |
//! | [`Phone`]    | exactly 12 ASCII digits (`380671234455`)       |
//! | [`Birthday`] | a real calendar date as `DD.MM.YYYY`           |
//!
//! A failed assignment never mutates the field: the previous value (or the unset state)
//! is kept and a [`ValidationError`] describing the rejected input is returned.
//!
//! Fields serialize as their bare optional value. Deserialization goes through the same
//! validation path, so a persisted file cannot smuggle in a malformed phone or date.

use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// `strftime` pattern used for birthdays, both for parsing and display.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

const PHONE_DIGITS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Phone,
    Birthday,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldKind::Name => "name",
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::Birthday => "birthday",
        };
        f.write_str(label)
    }
}

/// The validation rule attached to a field type.
///
/// Formats without a rule keep the default `is_valid`, which accepts everything.
pub trait FieldFormat {
    const KIND: FieldKind;
    const EXPECTED: &'static str = "any text";

    fn is_valid(_value: &str) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NameFormat;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EmailFormat;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PhoneFormat;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BirthdayFormat;

impl FieldFormat for NameFormat {
    const KIND: FieldKind = FieldKind::Name;
}

// Email shape is not checked yet.
impl FieldFormat for EmailFormat {
    const KIND: FieldKind = FieldKind::Email;
}

impl FieldFormat for PhoneFormat {
    const KIND: FieldKind = FieldKind::Phone;
    const EXPECTED: &'static str = "12 digits, e.g. 380671234455";

    fn is_valid(value: &str) -> bool {
        value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
    }
}

impl FieldFormat for BirthdayFormat {
    const KIND: FieldKind = FieldKind::Birthday;
    const EXPECTED: &'static str = "DD.MM.YYYY, e.g. 18.08.2003";

    fn is_valid(value: &str) -> bool {
        parse_birthday(value).is_some()
    }
}

/// Parses a strict `DD.MM.YYYY` date.
///
/// chrono alone is lenient about digit counts (`1.8.2003` parses), so the shape is
/// checked byte by byte before handing over for calendar validation.
pub fn parse_birthday(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return None;
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        2 | 5 => *b == b'.',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).ok()
}

/// A single, optionally-set value guarded by the format `F`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Field<F> {
    value: Option<String>,
    format: PhantomData<F>,
}

pub type Name = Field<NameFormat>;
pub type Email = Field<EmailFormat>;
pub type Phone = Field<PhoneFormat>;
pub type Birthday = Field<BirthdayFormat>;

impl<F: FieldFormat> Field<F> {
    /// Builds a field holding `value`, validated.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let mut field = Self::unset();
        field.set(value)?;
        Ok(field)
    }

    /// Builds a field with no value.
    pub fn unset() -> Self {
        Self {
            value: None,
            format: PhantomData,
        }
    }

    /// Builds a field from an optional initial value; `None` yields an unset field.
    pub fn from_option(value: Option<String>) -> Result<Self, ValidationError> {
        match value {
            Some(v) => Self::new(v),
            None => Ok(Self::unset()),
        }
    }

    /// Replaces the value if `value` passes validation. On failure the field is untouched.
    pub fn set(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        Self::validate(&value)?;
        self.value = Some(value);
        Ok(())
    }

    pub fn get(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// The current value or an empty string when unset.
    pub fn as_str(&self) -> &str {
        self.get().unwrap_or_default()
    }

    pub fn kind(&self) -> FieldKind {
        F::KIND
    }

    pub fn validate(value: &str) -> Result<(), ValidationError> {
        if F::is_valid(value) {
            Ok(())
        } else {
            Err(ValidationError {
                kind: F::KIND,
                value: value.to_string(),
                expected: F::EXPECTED,
            })
        }
    }
}

impl Name {
    /// Names carry no format rule, so this constructor cannot fail.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            format: PhantomData,
        }
    }
}

impl Birthday {
    /// The stored birthday as a calendar date.
    pub fn date(&self) -> Option<NaiveDate> {
        self.get().and_then(parse_birthday)
    }
}

impl<F: FieldFormat> fmt::Display for Field<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<F> Serialize for Field<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, F: FieldFormat> Deserialize<'de> for Field<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Self::from_option(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_twelve_digits() {
        let phone = Phone::new("380671234455").unwrap();
        assert_eq!(phone.get(), Some("380671234455"));
    }

    #[test]
    fn phone_rejects_other_shapes() {
        for bad in [
            "",
            "38067123445",
            "3806712344556",
            "+38067123445",
            "38067123445a",
            "380 67123445",
            "３８０６７１２３４４５５",
        ] {
            let err = Phone::new(bad).unwrap_err();
            assert_eq!(err.kind, FieldKind::Phone);
            assert_eq!(err.value, bad);
        }
    }

    #[test]
    fn failed_set_keeps_previous_value() {
        let mut phone = Phone::new("380671234455").unwrap();
        assert!(phone.set("12345").is_err());
        assert_eq!(phone.get(), Some("380671234455"));

        let mut unset = Phone::unset();
        assert!(unset.set("nope").is_err());
        assert!(!unset.is_set());
    }

    #[test]
    fn birthday_accepts_real_dates() {
        let birthday = Birthday::new("18.08.2003").unwrap();
        assert_eq!(
            birthday.date(),
            Some(NaiveDate::from_ymd_opt(2003, 8, 18).unwrap())
        );
        assert!(Birthday::new("29.02.2004").is_ok());
    }

    #[test]
    fn birthday_rejects_bad_dates() {
        for bad in [
            "18/08/2003",
            "2003.08.18",
            "1.8.2003",
            "18.8.2003",
            "31.02.2003",
            "29.02.2003",
            "aa.bb.cccc",
            "18.08.03",
            "",
        ] {
            assert!(Birthday::new(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn validation_message_names_value_and_format() {
        let err = Birthday::new("18-08-2003").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("18-08-2003"));
        assert!(msg.contains("DD.MM.YYYY"));
    }

    #[test]
    fn name_and_email_accept_anything() {
        assert!(Name::new("").is_ok());
        assert!(Name::new("Андрій").is_ok());
        assert!(Email::new("not an email").is_ok());
    }

    #[test]
    fn from_option_none_is_unset() {
        let birthday = Birthday::from_option(None).unwrap();
        assert!(!birthday.is_set());
        assert_eq!(birthday.date(), None);
    }

    #[test]
    fn deserialize_runs_validation() {
        let ok: Phone = serde_json::from_str("\"380671234455\"").unwrap();
        assert_eq!(ok.get(), Some("380671234455"));

        let unset: Phone = serde_json::from_str("null").unwrap();
        assert!(!unset.is_set());

        let bad: std::result::Result<Phone, _> = serde_json::from_str("\"123\"");
        assert!(bad.is_err());
    }
}
