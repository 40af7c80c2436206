//! Date formatting for the labour pages.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// `Jun 10, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Jun 10, 2025, 09:30 AM` in the viewer's local time zone.
pub fn format_datetime(at: DateTime<Utc>) -> String {
    format_local_datetime(at.with_timezone(&Local).naive_local())
}

fn format_local_datetime(at: chrono::NaiveDateTime) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}
