use chrono::{DateTime, NaiveDate, Utc};

/// Today's date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// `YYYY-MM` bucket key for a timestamp
pub fn month_key(at: DateTime<Utc>) -> String {
    at.format("%Y-%m").to_string()
}
