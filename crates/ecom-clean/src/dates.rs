//! Order-date normalization.
//!
//! Converts the raw `order_date` string into a `NaiveDate`. Accepted forms:
//! - `YYYY-MM-DD` (canonical, what the generator emits)
//! - `YYYY-MM-DD HH:MM:SS`
//! - `YYYY-MM-DDTHH:MM:SS`
//! - RFC 3339 with offset (the date is taken in the stated offset)
//!
//! The time part, if any, is dropped. Normalizing an already canonical date
//! returns the same date.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Why a date string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRejection {
    Empty,
    UnrecognizedFormat,
}

impl DateRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateRejection::Empty => "date is empty",
            DateRejection::UnrecognizedFormat => "unrecognized date format",
        }
    }
}

/// Parse a raw order date into a calendar date.
pub fn normalize_order_date(raw: &str) -> Result<NaiveDate, DateRejection> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(DateRejection::Empty);
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
        .map_err(|_| DateRejection::UnrecognizedFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn canonical_date() {
        assert_eq!(normalize_order_date("2023-07-04"), Ok(d(2023, 7, 4)));
    }

    #[test]
    fn canonical_is_idempotent() {
        let once = normalize_order_date("2023-12-31").unwrap();
        let twice = normalize_order_date(&once.format("%Y-%m-%d").to_string()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(normalize_order_date("  2023-01-01 "), Ok(d(2023, 1, 1)));
    }

    #[test]
    fn datetime_with_space_drops_time() {
        assert_eq!(
            normalize_order_date("2023-05-06 23:59:59"),
            Ok(d(2023, 5, 6))
        );
    }

    #[test]
    fn datetime_with_t_drops_time() {
        assert_eq!(
            normalize_order_date("2023-05-06T00:00:00"),
            Ok(d(2023, 5, 6))
        );
    }

    #[test]
    fn rfc3339_uses_stated_offset() {
        assert_eq!(
            normalize_order_date("2023-05-06T23:30:00-05:00"),
            Ok(d(2023, 5, 6))
        );
        assert_eq!(
            normalize_order_date("2023-05-06T10:00:00Z"),
            Ok(d(2023, 5, 6))
        );
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(normalize_order_date("   "), Err(DateRejection::Empty));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(
            normalize_order_date("not-a-date"),
            Err(DateRejection::UnrecognizedFormat)
        );
        assert_eq!(
            normalize_order_date("2023-02-30"),
            Err(DateRejection::UnrecognizedFormat)
        );
        assert_eq!(
            normalize_order_date("03/14/2023"),
            Err(DateRejection::UnrecognizedFormat)
        );
    }
}
