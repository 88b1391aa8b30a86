//! Shared formatting utilities for the UI layer.

use chrono::{NaiveDate, NaiveTime};

/// "Mar 4, 2026"
pub fn format_date_human(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "9:05 AM"
pub fn format_time_human(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Relative day label for appointment lists: "Today", "Tomorrow",
/// "Yesterday", else the full date.
pub fn format_day_relative(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => format_date_human(date),
    }
}

/// "1 item" / "3 items"
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
