//! Strict day-level date handling.
//!
//! Dates cross every boundary of the system (JSON bodies, SQLite columns) as
//! `YYYY-MM-DD` strings with no time or timezone component.

use chrono::NaiveDate;

use crate::{Error, Result};

/// The only accepted textual layout, in `chrono` strftime syntax.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// The layout is checked byte-by-byte before handing off to `chrono`, which
/// on its own would also accept single-digit months and days or signed years.
/// Strings that have the right shape but name an impossible day (e.g.
/// `2023-02-29`) are rejected too.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
  if !has_date_shape(s) {
    return Err(Error::InvalidDate(s.to_owned()));
  }
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|_| Error::InvalidDate(s.to_owned()))
}

/// Render a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
  date.format(DATE_FORMAT).to_string()
}

fn has_date_shape(s: &str) -> bool {
  let bytes = s.as_bytes();
  bytes.len() == 10
    && bytes.iter().enumerate().all(|(i, b)| match i {
      4 | 7 => *b == b'-',
      _ => b.is_ascii_digit(),
    })
}
