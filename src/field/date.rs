//! Dates and timestamps.
//!
//! The card counts time from 1995-01-01 00:00, which is 9131 days after the
//! Unix epoch. Dates are day counts. Transaction timestamps are second
//! counts recorded in local time (UTC+8), and are shifted back by eight
//! hours when decoded.

use alloc::string::{String, ToString};

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

use super::parse_hex;

/// Days between the Unix epoch and the card epoch.
pub const EPOCH_OFFSET_DAYS: u32 = 9131;

/// Seconds subtracted from transaction timestamps.
pub const TIMESTAMP_SHIFT_SECONDS: i64 = 8 * 60 * 60;

/// Display format of dates, `DD/MM/YYYY`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Display format of timestamps, `DD/MM/YYYY HH:MM:SS`.
pub const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Decode a day count field into a calendar date.
pub fn decode_date(field: &str) -> Option<NaiveDate> {
    let days = parse_hex(field)?;

    NaiveDate::from_ymd_opt(1970, 1, 1)?
        .checked_add_days(Days::new(u64::from(days) + u64::from(EPOCH_OFFSET_DAYS)))
}

/// Decode a four-byte second count field into a date and time.
pub fn decode_date_time(field: &str) -> Option<NaiveDateTime> {
    let seconds = i64::from(parse_hex(field)?);
    let seconds = seconds + i64::from(EPOCH_OFFSET_DAYS) * 86_400 - TIMESTAMP_SHIFT_SECONDS;

    DateTime::from_timestamp(seconds, 0).map(|t| t.naive_utc())
}

/// Format a decoded date as `DD/MM/YYYY`, or an empty string.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Format a decoded timestamp as `DD/MM/YYYY HH:MM:SS`, or an empty string.
pub fn format_date_time(date_time: Option<NaiveDateTime>) -> String {
    date_time
        .map(|t| t.format(DATE_TIME_FORMAT).to_string())
        .unwrap_or_default()
}
