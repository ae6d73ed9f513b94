//! Date Detection
//!
//! Registration and draw timestamps travel as strings. A text cell counts as a
//! date when it parses under one of the formats below; the comparator then
//! orders it chronologically instead of lexicographically.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-time layouts without an offset, read as UTC
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts, read as UTC midnight. Month and day padding is optional.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%b %d, %Y", "%d %b %Y"];

/// Offset-carrying layouts not covered by RFC 3339
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Parse a text cell into epoch milliseconds, or `None` if it is not a date.
///
/// Bare integers are never treated as dates, so numeric strings such as ticket
/// numbers keep their text ordering.
pub fn parse_timestamp(text: &str) -> Option<i64> {
    let s = text.trim();
    if s.is_empty() || s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp_millis());
    }
    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.timestamp_millis());
        }
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_dates_parse() {
        assert!(parse_timestamp("2024-01-05").is_some());
        assert!(parse_timestamp("2024-01-05T10:30:00Z").is_some());
        assert!(parse_timestamp("2024-01-05T10:30:00.250+02:00").is_some());
        assert!(parse_timestamp("2024-01-05 10:30:00").is_some());
        assert!(parse_timestamp(" 2024-01-05 ").is_some());
    }

    #[test]
    fn unpadded_dates_parse_chronologically() {
        let feb = parse_timestamp("2024-2-1").expect("unpadded date");
        let oct = parse_timestamp("2024-10-1").expect("unpadded date");
        assert!(feb < oct);
    }

    #[test]
    fn other_layouts_parse() {
        assert!(parse_timestamp("01/05/2024").is_some());
        assert!(parse_timestamp("Jan 5, 2024").is_some());
        assert!(parse_timestamp("5 Jan 2024").is_some());
        assert!(parse_timestamp("Fri, 05 Jan 2024 10:00:00 +0000").is_some());
    }

    #[test]
    fn date_only_is_utc_midnight() {
        let date = parse_timestamp("1970-01-02").expect("date");
        assert_eq!(date, 86_400_000);
    }

    #[test]
    fn non_dates_are_rejected() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("12345"), None);
        assert_eq!(parse_timestamp("Alice Smith"), None);
        assert_eq!(parse_timestamp("2024-13-01"), None);
        assert_eq!(parse_timestamp("T-0042"), None);
    }

    #[test]
    fn bare_digit_strings_are_not_dates() {
        assert_eq!(parse_timestamp("2024"), None);
        assert_eq!(parse_timestamp("20240105"), None);
        assert_eq!(parse_timestamp(" 0042 "), None);
    }
}
