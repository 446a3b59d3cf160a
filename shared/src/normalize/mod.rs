//! Normalizers for loosely-typed backend payloads
//!
//! The backend does not commit to one shape per entity: the same field may
//! arrive as `baseSalary`, `salary` or `basic_salary`, and money may be a
//! number or a formatted string such as `"AED 1,200.50"`. Everything in
//! this module is pure and total: it never fails, it falls back to a safe
//! default instead.
//!
//! - [`currency`]: amount parsing and AED formatting
//! - [`date`]: loose date parsing, day deltas, display formatting
//! - [`fields`]: prioritized alias probing over a JSON object
//! - [`aliases`]: the alias tables, one place for every known field spelling

pub mod aliases;
pub mod currency;
pub mod date;
pub mod fields;

pub use currency::{format_aed, parse_currency, parse_currency_str};
pub use date::{days_until, format_date, parse_date_value, parse_loose_datetime};

use serde_json::Value;

/// Adapter from a raw backend record to a canonical entity.
///
/// Implementations must be total: any JSON value (including `null` or a
/// non-object) yields a fully-populated entity with defaults.
pub trait Normalize: Sized {
    fn normalize(raw: &Value) -> Self;

    fn normalize_all(raw: &[Value]) -> Vec<Self> {
        raw.iter().map(Self::normalize).collect()
    }
}
