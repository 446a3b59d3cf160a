//! Loose date handling
//!
//! Backend dates arrive as `YYYY-MM-DD`, full RFC 3339 timestamps, naive
//! `YYYY-MM-DD HH:MM:SS` strings or epoch milliseconds. Naive values are
//! read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a date or date-time string, `None` when empty or unrecognized
pub fn parse_loose_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse a date carried in a JSON value (string or epoch millis)
pub fn parse_date_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_loose_datetime(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        _ => None,
    }
}

/// Whole days from `now` until the given date, rounded up.
///
/// `None` for empty or unparseable input. A date-only string for today
/// yields `0` once the day has started.
pub fn days_until(raw: &str, now: DateTime<Utc>) -> Option<i64> {
    let target = parse_loose_datetime(raw)?;
    let delta_ms = (target - now).num_milliseconds() as f64;
    Some((delta_ms / MILLIS_PER_DAY).ceil() as i64)
}

/// Display format `19 Oct 2026`; unparseable input is returned unchanged
pub fn format_date(raw: &str) -> String {
    match parse_loose_datetime(raw) {
        Some(dt) => dt.format("%d %b %Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_days_until_today_is_zero_or_minus_one() {
        let now = at(2026, 10, 19, 15);
        let days = days_until("2026-10-19", now).unwrap();
        assert!(days == 0 || days == -1, "got {days}");
    }

    #[test]
    fn test_days_until_future_and_past() {
        let now = at(2026, 10, 19, 9);
        assert_eq!(days_until("2026-10-29", now), Some(10));
        assert_eq!(days_until("2026-10-09", now), Some(-10));
        assert_eq!(days_until("2026-10-20T09:00:00Z", now), Some(1));
    }

    #[test]
    fn test_days_until_missing() {
        let now = at(2026, 10, 19, 0);
        assert_eq!(days_until("", now), None);
        assert_eq!(days_until("not a date", now), None);
    }

    #[test]
    fn test_parse_variants() {
        assert!(parse_loose_datetime("2026-01-05 10:30:00").is_some());
        assert!(parse_loose_datetime("2026-01-05T10:30").is_some());
        assert!(parse_loose_datetime("2026-01-05T10:30:00+04:00").is_some());
        assert_eq!(
            parse_date_value(&json!(0)).map(|d| d.timestamp()),
            Some(0)
        );
        assert_eq!(parse_date_value(&Value::Null), None);
    }

    #[test]
    fn test_format_date_fails_open() {
        assert_eq!(format_date("2026-03-07"), "07 Mar 2026");
        assert_eq!(format_date("someday"), "someday");
    }
}
