//! Lead Model (CRM pipeline)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Priority, record_id};
use crate::normalize::{Normalize, aliases, aliases::lead as alias, fields};

/// Pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    FollowUp,
    Converted,
    Lost,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        Self::New,
        Self::Contacted,
        Self::FollowUp,
        Self::Converted,
        Self::Lost,
    ];

    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        match normalized.as_str() {
            "contacted" => Self::Contacted,
            "followup" => Self::FollowUp,
            "converted" | "won" => Self::Converted,
            "lost" | "closedlost" => Self::Lost,
            _ => Self::New,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::FollowUp => "follow-up",
            Self::Converted => "converted",
            Self::Lost => "lost",
        }
    }
}

/// Lead entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub source: String,
    pub priority: Priority,
    pub status: LeadStatus,
    /// 0-100, clamped
    pub score: u8,
    pub assigned_to: Option<String>,
    pub next_follow_up_date: Option<String>,
}

impl Normalize for Lead {
    fn normalize(raw: &Value) -> Self {
        let score = fields::amount_or_zero(raw, alias::SCORE).clamp(0.0, 100.0).round() as u8;
        Self {
            id: record_id(raw),
            name: fields::person_name(
                raw,
                &["fullName", "name"],
                aliases::FIRST_NAME,
                aliases::LAST_NAME,
                &["leadName"],
                alias::UNKNOWN,
            ),
            email: fields::text_or(raw, aliases::EMAIL, ""),
            phone: fields::text_or(raw, aliases::PHONE, ""),
            source: fields::text_or(raw, alias::SOURCE, "Unknown"),
            priority: Priority::parse(&fields::text_or(raw, alias::PRIORITY, "")),
            status: LeadStatus::parse(&fields::text_or(raw, aliases::STATUS, "")),
            score,
            assigned_to: fields::first_text(raw, alias::ASSIGNED_TO),
            next_follow_up_date: fields::first_text(raw, alias::NEXT_FOLLOW_UP),
        }
    }
}

/// Create / update lead payload (`/leads`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub source: Option<String>,
    pub priority: Priority,
    pub status: LeadStatus,
    pub score: Option<u8>,
    pub assigned_to: Option<String>,
    pub next_follow_up_date: Option<String>,
}

/// Backend-computed pipeline stats (`GET /leads/stats`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackendLeadStats {
    #[serde(alias = "totalLeads")]
    pub total: u64,
    #[serde(alias = "newLeads")]
    pub new: u64,
    pub contacted: u64,
    #[serde(alias = "followUps")]
    pub follow_up: u64,
    #[serde(alias = "convertedLeads")]
    pub converted: u64,
    pub lost: u64,
    pub conversion_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_spellings() {
        assert_eq!(LeadStatus::parse("Follow-Up"), LeadStatus::FollowUp);
        assert_eq!(LeadStatus::parse("follow_up"), LeadStatus::FollowUp);
        assert_eq!(LeadStatus::parse("CONVERTED"), LeadStatus::Converted);
        assert_eq!(LeadStatus::parse("mystery"), LeadStatus::New);
        assert_eq!(serde_json::to_value(LeadStatus::FollowUp).unwrap(), json!("follow-up"));
    }

    #[test]
    fn test_score_clamped() {
        assert_eq!(Lead::normalize(&json!({"score": 140})).score, 100);
        assert_eq!(Lead::normalize(&json!({"score": -3})).score, 0);
        assert_eq!(Lead::normalize(&json!({"score": "72"})).score, 72);
    }

    #[test]
    fn test_backend_stats_tolerates_partial_payload() {
        let stats: BackendLeadStats =
            serde_json::from_value(json!({"totalLeads": 12, "converted": 3})).unwrap();
        assert_eq!(stats.total, 12);
        assert_eq!(stats.converted, 3);
        assert_eq!(stats.lost, 0);
    }
}
