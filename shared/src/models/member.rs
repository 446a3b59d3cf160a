//! Member Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::status_is;
use crate::normalize::{Normalize, aliases, aliases::member as alias, fields};

/// Member entity (read-only in the dashboard)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Raw status text as reported by the backend
    pub status: String,
    pub is_active: bool,
    pub plan: Option<String>,
}

impl Normalize for Member {
    fn normalize(raw: &Value) -> Self {
        let flag = fields::first_bool(raw, alias::IS_ACTIVE);
        let status = fields::first_text(raw, alias::STATUS).unwrap_or_else(|| {
            match flag {
                Some(true) => "active",
                _ => "inactive",
            }
            .to_string()
        });
        let is_active = flag.unwrap_or_else(|| status_is(&status, "active"));

        Self {
            id: fields::text_or(raw, alias::ID, ""),
            name: fields::person_name(
                raw,
                alias::FULL_NAME,
                aliases::FIRST_NAME,
                aliases::LAST_NAME,
                alias::FALLBACK_NAME,
                alias::UNKNOWN,
            ),
            email: fields::text_or(raw, aliases::EMAIL, ""),
            phone: fields::text_or(raw, aliases::PHONE, ""),
            status,
            is_active,
            plan: fields::first_text(raw, alias::PLAN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_fallback_chain() {
        let m = Member::normalize(&json!({"fullName": "Lina Haddad", "name": "ignored"}));
        assert_eq!(m.name, "Lina Haddad");

        let m = Member::normalize(&json!({"first_name": "Lina", "last_name": "Haddad"}));
        assert_eq!(m.name, "Lina Haddad");

        let m = Member::normalize(&json!({"memberName": "L. Haddad"}));
        assert_eq!(m.name, "L. Haddad");

        let m = Member::normalize(&json!({}));
        assert_eq!(m.name, "Unknown Member");
    }

    #[test]
    fn test_active_from_status_or_flag() {
        assert!(Member::normalize(&json!({"status": "Active"})).is_active);
        assert!(!Member::normalize(&json!({"status": "frozen"})).is_active);
        let m = Member::normalize(&json!({"isActive": true}));
        assert!(m.is_active);
        assert_eq!(m.status, "active");
    }

    #[test]
    fn test_plan_from_nested_object() {
        let m = Member::normalize(&json!({"plan": {"name": "Gold"}}));
        assert_eq!(m.plan.as_deref(), Some("Gold"));
    }
}
