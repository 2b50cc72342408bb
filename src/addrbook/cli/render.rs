//! # Rendering Module
//!
//! Turns command results into terminal text. Every `render_*` function returns a `String`
//! so output can be checked in tests; the `*_with_color` variants pin styling on or off,
//! the plain ones follow console's terminal detection.
//!
//! Layout (column widths, truncation) is computed here with `unicode-width` so names in
//! any script line up.

use super::styles::ADDRBOOK_THEME;
use addrbook::api::{CmdMessage, MessageLevel};
use addrbook::book::UpcomingBirthday;
use addrbook::config::{AddrBookConfig, CONFIG_KEYS};
use addrbook::model::Record;
use chrono::NaiveDate;
use colored::Colorize;
use console::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest name shown in the birthdays table before truncation.
pub const NAME_WIDTH: usize = 24;
const MISSING: &str = "N/A";

fn paint(style: &Style, text: &str, use_color: Option<bool>) -> String {
    match use_color {
        Some(c) => style.clone().force_styling(c).apply_to(text).to_string(),
        None => style.apply_to(text).to_string(),
    }
}

fn or_missing(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Describes a day offset as "today", "tomorrow" or "in N days".
pub fn days_phrase(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        n => format!("in {} days", n),
    }
}

pub fn render_contacts(records: &[Record], today: NaiveDate) -> String {
    render_contacts_with_color(records, today, None)
}

pub fn render_contacts_with_color(
    records: &[Record],
    today: NaiveDate,
    use_color: Option<bool>,
) -> String {
    let theme = &*ADDRBOOK_THEME;
    let mut out = String::new();

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&paint(&theme.name, record.name(), use_color));
        out.push('\n');

        let rows = [
            ("Phones:", or_missing(record.phones_joined())),
            ("Emails:", or_missing(record.emails_joined())),
            (
                "Birthday:",
                record.birthday().map(|b| {
                    match record.days_until_birthday_from(today) {
                        Some(days) => format!("{} ({})", b, days_phrase(days)),
                        None => b.to_string(),
                    }
                }),
            ),
        ];

        for (label, value) in rows {
            let value = match value {
                Some(v) => v,
                None => paint(&theme.muted, MISSING, use_color),
            };
            out.push_str(&format!(
                "  {} {}\n",
                paint(&theme.label, &format!("{:<9}", label), use_color),
                value
            ));
        }
    }
    out
}

pub fn render_pages(pages: &[String]) -> String {
    render_pages_with_color(pages, None)
}

pub fn render_pages_with_color(pages: &[String], use_color: Option<bool>) -> String {
    let theme = &*ADDRBOOK_THEME;
    let total = pages.len();
    let mut out = String::new();
    for (i, page) in pages.iter().enumerate() {
        let header = format!("Page {}/{}", i + 1, total);
        out.push_str(&paint(&theme.page, &header, use_color));
        out.push('\n');
        out.push_str(page);
        out.push('\n');
    }
    out
}

/// One line per matching contact, or "Nothing found." when there are none.
pub fn render_search(records: &[&Record]) -> String {
    if records.is_empty() {
        return "Nothing found.\n".to_string();
    }
    records.iter().map(|r| format!("{}\n", r)).collect()
}

pub fn render_birthdays(birthdays: &[UpcomingBirthday]) -> String {
    render_birthdays_with_color(birthdays, None)
}

pub fn render_birthdays_with_color(
    birthdays: &[UpcomingBirthday],
    use_color: Option<bool>,
) -> String {
    let theme = &*ADDRBOOK_THEME;
    let mut out = String::new();
    for entry in birthdays {
        let name = truncate_to_width(&entry.name, NAME_WIDTH);
        let padding = " ".repeat(NAME_WIDTH.saturating_sub(name.width()));
        let when = days_phrase(entry.days);
        let when = if entry.days <= 1 {
            paint(&theme.soon, &when, use_color)
        } else {
            when
        };
        out.push_str(&format!("  {}{}  {}\n", name, padding, when));
    }
    out
}

pub fn render_config(config: &AddrBookConfig) -> String {
    CONFIG_KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// Cuts `s` to fit `max_width` columns, ending in "…" when shortened.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
