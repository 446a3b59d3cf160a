//! Types shared by several models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::{aliases, fields};

/// Priority used by follow-ups and leads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Case-insensitive parse, defaulting to `Medium`
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" | "urgent" | "hot" => Self::High,
            "low" | "cold" => Self::Low,
            _ => Self::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Record identifier: string or number, empty when absent
pub fn record_id(raw: &Value) -> String {
    fields::text_or(raw, aliases::ID, "")
}

/// Case-insensitive status comparison
pub fn status_is(status: &str, expected: &str) -> bool {
    status.trim().eq_ignore_ascii_case(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse("HIGH"), Priority::High);
        assert_eq!(Priority::parse(" low "), Priority::Low);
        assert_eq!(Priority::parse(""), Priority::Medium);
    }

    #[test]
    fn test_record_id_accepts_numbers() {
        assert_eq!(record_id(&json!({"id": 17})), "17");
        assert_eq!(record_id(&json!({"_id": "abc"})), "abc");
        assert_eq!(record_id(&json!({})), "");
    }
}
