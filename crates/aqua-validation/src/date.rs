//! Calendar date and time-of-day validation

use chrono::{NaiveDate, NaiveTime};

/// Parses an HTML date input value (`YYYY-MM-DD`)
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Parses an HTML time input value (`HH:MM`, seconds optional)
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Date-not-in-past: `date` must fall on `today` or later
///
/// Only calendar days are compared; the time of day plays no part.
pub fn is_not_in_past(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

/// Parses `value` and checks it is not before `today`
pub fn validate_not_in_past(value: &str, today: NaiveDate) -> Result<(), String> {
    let date = parse_date(value).ok_or_else(|| "Enter a valid date".to_string())?;

    if is_not_in_past(date, today) {
        Ok(())
    } else {
        Err("Date cannot be earlier than today".to_string())
    }
}
