//! Relative and absolute date formatting for movements.

use chrono::{DateTime, Utc};
use minibank_shared::types::Locale;

/// Formats a movement timestamp relative to `now`.
///
/// Same calendar day is "Today", one day prior "Yesterday", 2-6 days "N
/// days ago", 7-13 days "a week ago". Anything older (or a timestamp in
/// the future, which the append-only store never produces) falls back to
/// the locale's absolute date format.
#[must_use]
pub fn format_movement_date(date: DateTime<Utc>, now: DateTime<Utc>, locale: Locale) -> String {
    let days = (now.date_naive() - date.date_naive()).num_days();
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        7..=13 => "a week ago".to_string(),
        _ => format_absolute(date, locale),
    }
}

/// Formats the current date and time for the balance header.
#[must_use]
pub fn format_current_date(now: DateTime<Utc>, locale: Locale) -> String {
    match locale {
        Locale::EnUs => now.format("%m/%d/%Y, %H:%M").to_string(),
        Locale::PtPt => now.format("%d/%m/%Y, %H:%M").to_string(),
        Locale::DeDe => now.format("%d.%m.%Y, %H:%M").to_string(),
    }
}

fn format_absolute(date: DateTime<Utc>, locale: Locale) -> String {
    match locale {
        Locale::EnUs => date.format("%m/%d/%Y").to_string(),
        Locale::PtPt => date.format("%d/%m/%Y").to_string(),
        Locale::DeDe => date.format("%d.%m.%Y").to_string(),
    }
}
