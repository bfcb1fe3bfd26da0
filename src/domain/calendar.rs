//! Calendar date parsing and display formatting
//!
//! Dates are handled as plain calendar days (`NaiveDate`). A trailing time
//! portion is dropped before parsing, so no timezone offset can move the day.

use crate::error::{EventStatsError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Long display form, e.g. "Monday, Oct 18, 2021"
const DISPLAY_FORMAT: &str = "%A, %b %-d, %Y";

fn date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(concat!(
            r"^(\d{4})-(\d{1,2})-(\d{1,2})",
            // optional time of day and offset, validated then dropped
            r"(?:[T ](?:[01]\d|2[0-3])(?::[0-5]\d(?::[0-5]\d(?:[.,]\d+)?)?)?",
            r"(?:Z|[+-](?:[01]\d|2[0-3])(?::?[0-5]\d)?)?)?$",
        ))
        .unwrap()
    })
}

/// Parse an ISO 8601 calendar date
///
/// Accepts `YYYY-MM-DD`, tolerates missing zero padding on month and day,
/// and accepts an ISO time of day (`T10:30:00.5+02:00`, `T10Z`, ` 10:30`)
/// after a `T` or space separator. The time is checked and then ignored.
///
/// # Examples
///
/// ```
/// use eventstats::domain::calendar::parse_calendar_date;
///
/// let date = parse_calendar_date("2021-10-18").unwrap();
/// assert_eq!(date.to_string(), "2021-10-18");
/// assert_eq!(parse_calendar_date("2021-10-18T23:59:00-08:00").unwrap(), date);
/// ```
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    let invalid = || EventStatsError::InvalidInput(input.to_string());

    let captures = date_regex().captures(trimmed).ok_or_else(invalid)?;
    let year: i32 = captures[1].parse().map_err(|_| invalid())?;
    let month: u32 = captures[2].parse().map_err(|_| invalid())?;
    let day: u32 = captures[3].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Render an ISO calendar date as "<weekday>, <month> <day>, <year>"
///
/// # Examples
///
/// ```
/// use eventstats::format_date;
///
/// assert_eq!(format_date("2021-10-18").unwrap(), "Monday, Oct 18, 2021");
/// assert!(format_date("18/10/2021").is_err());
/// ```
pub fn format_date(date: &str) -> Result<String> {
    parse_calendar_date(date).map(display_date)
}

/// Display form of an already parsed date
pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}
