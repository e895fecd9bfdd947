use std::fmt::Write;

use chrono::{
    Local, NaiveDate, NaiveDateTime, NaiveTime,
    format::{Item, StrftimeItems},
};

use crate::error::{PlaylistError, Result};

pub const DEFAULT_DATE_FORMAT: &str = "%Y%m%d";

/// Checks that `date_format` is a strftime pattern chrono understands.
pub fn validate_date_format(date_format: &str) -> Result<()> {
    if date_format.trim().is_empty() {
        return Err(PlaylistError::Config("date format cannot be empty".into()));
    }

    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        return Err(PlaylistError::Config(format!(
            "invalid date format '{}'",
            date_format
        )));
    }

    Ok(())
}

/// Renders `date` the way the playlist feed writes its keys.
pub fn format_date_key(date: NaiveDate, date_format: &str) -> Result<String> {
    let mut key = String::new();
    write!(key, "{}", date.and_time(NaiveTime::MIN).format(date_format)).map_err(|_| {
        PlaylistError::Config(format!("cannot render a date with format '{}'", date_format))
    })?;
    Ok(key)
}

/// Parses a playlist key into a calendar date.
///
/// chrono accepts numeric fields narrower than their full width (`%m` takes
/// "1" as well as "01"), so a key is only valid if it is the canonical
/// rendering of the date it parses to. This keeps `YYYYMMDD` keys fixed-width:
/// "2021123" and "202102010" are both rejected.
pub fn parse_date_key(key: &str, date_format: &str) -> Result<NaiveDate> {
    let date =
        NaiveDate::parse_from_str(key, date_format).map_err(|e| PlaylistError::DateParse {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

    if format_date_key(date, date_format)? != key {
        return Err(PlaylistError::DateParse {
            key: key.to_string(),
            reason: format!("not in fixed-width '{}' form", date_format),
        });
    }

    Ok(date)
}

/// Reference instant for resolution: midnight of the given date key, or the
/// current local time when no date is given.
pub fn get_reference_instant(date: Option<&str>, date_format: &str) -> Result<NaiveDateTime> {
    match date {
        Some(key) => Ok(parse_date_key(key, date_format)?.and_time(NaiveTime::MIN)),
        None => Ok(Local::now().naive_local()),
    }
}
