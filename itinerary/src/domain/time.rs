//! Date and time handling for itinerary segments.
//!
//! Itinerary files carry dates as `YYYY-MM-DD` and clock times as `HH:MM`.
//! Every instant is interpreted in UTC; there is no timezone handling.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Error returned when parsing an invalid date or time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {what} \"{input}\": {reason}")]
pub struct TimeError {
    what: &'static str,
    input: String,
    reason: &'static str,
}

impl TimeError {
    fn date(input: &str, reason: &'static str) -> Self {
        Self {
            what: "date",
            input: input.to_string(),
            reason,
        }
    }

    fn clock(input: &str, reason: &'static str) -> Self {
        Self {
            what: "time",
            input: input.to_string(),
            reason,
        }
    }
}

/// Parse a calendar date in `YYYY-MM-DD` format.
///
/// # Examples
///
/// ```
/// use itinerary::domain::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_date("2023-03-02").unwrap(),
///     NaiveDate::from_ymd_opt(2023, 3, 2).unwrap()
/// );
/// assert!(parse_date("2023-02-30").is_err());
/// assert!(parse_date("02/03/2023").is_err());
/// ```
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    if s.len() != 10 {
        return Err(TimeError::date(s, "expected YYYY-MM-DD format"));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| TimeError::date(s, "not a valid calendar date"))
}

/// Parse a clock time in strict `HH:MM` format.
///
/// # Examples
///
/// ```
/// use itinerary::domain::parse_clock;
///
/// // Valid times
/// assert!(parse_clock("00:00").is_ok());
/// assert!(parse_clock("23:59").is_ok());
///
/// // Invalid formats
/// assert!(parse_clock("1430").is_err());
/// assert!(parse_clock("14:3").is_err());
/// assert!(parse_clock("25:00").is_err());
/// ```
pub fn parse_clock(s: &str) -> Result<NaiveTime, TimeError> {
    // Must be exactly 5 characters: HH:MM
    if s.len() != 5 {
        return Err(TimeError::clock(s, "expected HH:MM format"));
    }

    let bytes = s.as_bytes();

    if bytes[2] != b':' {
        return Err(TimeError::clock(s, "expected colon at position 2"));
    }

    let hour =
        parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::clock(s, "invalid hour digits"))?;
    if hour > 23 {
        return Err(TimeError::clock(s, "hour must be 0-23"));
    }

    let minute = parse_two_digits(&bytes[3..5])
        .ok_or_else(|| TimeError::clock(s, "invalid minute digits"))?;
    if minute > 59 {
        return Err(TimeError::clock(s, "minute must be 0-59"));
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| TimeError::clock(s, "invalid time"))
}

/// The instant a hotel night is anchored to: the last second of `date`, UTC.
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(last_second()).and_utc()
}

/// Combine a date and a clock time into a UTC instant.
pub fn at_utc(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    date.and_time(time).and_utc()
}

fn last_second() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or_default()
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
