//! Purchase date parsing

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-time layouts tried, in order, after RFC 3339
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a purchase date string
///
/// Accepted layouts:
/// * RFC 3339 (`2023-04-11T08:26:00Z`), converted to UTC wall time
/// * `2023-04-11 08:26:00` / `2023-04-11T08:26:00`, optionally with fractional seconds
/// * `2023-04-11`, taken as midnight
pub fn parse_purchase_date(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::malformed_unpositioned(format!("unparseable purchase date '{s}'")))
}
