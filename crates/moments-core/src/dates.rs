//! Conversions between calendar dates and the fixed `dd/mm/yyyy` display format.

use chrono::{Datelike, NaiveDate};

/// Formats a date as two-digit day, two-digit month and four-digit year.
pub fn format_display(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

/// Parses `dd/mm/yyyy`. The year must have exactly four digits. Any other
/// shape, or a day that does not exist, yields `None`.
pub fn parse_display(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    if parts
        .iter()
        .any(|part| part.is_empty() || !part.chars().all(|ch| ch.is_ascii_digit()))
    {
        return None;
    }
    if parts[2].len() != 4 {
        return None;
    }
    let day = parts[0].parse::<u32>().ok()?;
    let month = parts[1].parse::<u32>().ok()?;
    let year = parts[2].parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn is_same_day(left: NaiveDate, right: NaiveDate) -> bool {
    left == right
}

/// Returns `true` when `date` falls strictly before `reference`.
pub fn is_before(date: NaiveDate, reference: NaiveDate) -> bool {
    date < reference
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Moves `date` by whole months, rolling across years and clamping the day to
/// the target month's length.
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let index = date.year() * 12 + date.month0() as i32 + months;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

pub fn shift_years(date: NaiveDate, years: i32) -> NaiveDate {
    shift_months(date, years * 12)
}
