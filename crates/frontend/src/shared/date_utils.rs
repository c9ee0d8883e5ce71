//! Utilities for date formatting
//!
//! Sales records carry dates in whatever shape the import produced them:
//! ISO datetimes, `YYYY-MM-DD`, or `DD/MM/YYYY`.

use chrono::NaiveDate;

/// Result of formatting a record date for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayDate {
    /// No value; rendered as a placeholder
    Missing,
    /// Present but not a date; rendered as a marked "Invalid Date"
    Invalid,
    /// `DD Mon YYYY`
    Formatted(String),
}

/// Parse a record date by its delimiter convention.
///
/// - a digit followed by `T`: ISO datetime, the date part is used
/// - contains `-`: year-month-day
/// - contains `/`: day/month/year
/// - otherwise a few spelled-out forms ("15 Mar 2024", "March 15, 2024")
///
/// A trailing time separated by whitespace is ignored. Calendar-invalid
/// dates (e.g. 2024-02-30) are rejected.
pub fn parse_record_date(date_str: &str) -> Option<NaiveDate> {
    let trimmed = date_str.trim();

    if let Some(date_part) = iso_date_part(trimmed) {
        return parse_parts(date_part, '-', [0, 1, 2]);
    }

    if trimmed.contains('-') {
        let date_part = trimmed.split_whitespace().next().unwrap_or(trimmed);
        return parse_parts(date_part, '-', [0, 1, 2]);
    }

    if trimmed.contains('/') {
        let date_part = trimmed.split_whitespace().next().unwrap_or(trimmed);
        return parse_parts(date_part, '/', [2, 1, 0]);
    }

    [
        "%d %b %Y",
        "%d %B %Y",
        "%b %d, %Y",
        "%B %d, %Y",
        "%a, %d %b %Y",
        "%A, %d %B %Y",
    ]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Text before the `T` of `2024-03-15T10:30:00`; `None` unless a digit precedes the `T`
fn iso_date_part(value: &str) -> Option<&str> {
    value
        .char_indices()
        .find(|&(i, c)| c == 'T' && value[..i].ends_with(|p: char| p.is_ascii_digit()))
        .map(|(i, _)| &value[..i])
}

/// `order` gives the positions of year, month and day among the parts.
fn parse_parts(date_part: &str, separator: char, order: [usize; 3]) -> Option<NaiveDate> {
    let parts: Vec<&str> = date_part.split(separator).map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }

    let year: i32 = parts[order[0]].parse().ok()?;
    let month: u32 = parts[order[1]].parse().ok()?;
    let day: u32 = parts[order[2]].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Format a record date as `DD Mon YYYY`
/// Example: "2024-03-15" or "15/03/2024" -> "15 Mar 2024"
pub fn format_display_date(date_str: Option<&str>) -> DisplayDate {
    match date_str.map(str::trim) {
        None | Some("") => DisplayDate::Missing,
        Some(value) => match parse_record_date(value) {
            Some(date) => DisplayDate::Formatted(date.format("%d %b %Y").to_string()),
            None => DisplayDate::Invalid,
        },
    }
}
