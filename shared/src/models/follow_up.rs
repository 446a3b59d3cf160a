//! Follow-up Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Priority, record_id};
use crate::normalize::{Normalize, aliases, aliases::follow_up as alias, fields};

/// Outreach channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FollowUpType {
    #[default]
    Call,
    Email,
    Whatsapp,
    Meeting,
}

impl FollowUpType {
    pub fn parse(raw: &str) -> Self {
        let lower = raw.trim().to_ascii_lowercase();
        if lower.contains("whatsapp") {
            Self::Whatsapp
        } else if lower.contains("mail") {
            Self::Email
        } else if lower.contains("meet") || lower.contains("visit") {
            Self::Meeting
        } else {
            Self::Call
        }
    }
}

/// Board column a follow-up is shown in, derived from its status text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FollowUpColumn {
    Pending,
    Overdue,
    Completed,
    Cancelled,
    Rescheduled,
}

impl FollowUpColumn {
    /// Board order
    pub const ALL: [FollowUpColumn; 5] = [
        Self::Pending,
        Self::Overdue,
        Self::Completed,
        Self::Cancelled,
        Self::Rescheduled,
    ];

    /// Priority-ordered substring match, first hit wins:
    /// overdue > complete > cancel > resched > Pending.
    ///
    /// `"Completed-Rescheduled"` therefore lands in `Completed`.
    pub fn from_status(status: &str) -> Self {
        let lower = status.to_ascii_lowercase();
        if lower.contains("overdue") {
            Self::Overdue
        } else if lower.contains("complete") {
            Self::Completed
        } else if lower.contains("cancel") {
            Self::Cancelled
        } else if lower.contains("resched") {
            Self::Rescheduled
        } else {
            Self::Pending
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Overdue => "Overdue",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Rescheduled => "Rescheduled",
        }
    }
}

/// Follow-up entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FollowUp {
    pub id: String,
    pub member_id: Option<String>,
    pub member_name: String,
    pub subject: String,
    #[serde(rename = "type")]
    pub kind: FollowUpType,
    pub priority: Priority,
    /// Raw status text
    pub status: String,
    /// Always `FollowUpColumn::from_status(&status)`
    pub column: FollowUpColumn,
    pub due_date: Option<String>,
    pub due_time: Option<String>,
    pub assigned_to: String,
    pub completed_at: Option<String>,
}

impl Normalize for FollowUp {
    fn normalize(raw: &Value) -> Self {
        let status = fields::text_or(raw, aliases::STATUS, "Pending");
        Self {
            id: record_id(raw),
            member_id: fields::first_text(raw, alias::MEMBER_ID),
            member_name: fields::text_or(raw, alias::MEMBER_NAME, aliases::member::UNKNOWN),
            subject: fields::text_or(raw, alias::SUBJECT, alias::DEFAULT_SUBJECT),
            kind: FollowUpType::parse(&fields::text_or(raw, alias::TYPE, "")),
            priority: Priority::parse(&fields::text_or(raw, alias::PRIORITY, "")),
            column: FollowUpColumn::from_status(&status),
            status,
            due_date: fields::first_text(raw, alias::DUE_DATE),
            due_time: fields::first_text(raw, alias::DUE_TIME),
            assigned_to: fields::text_or(raw, alias::ASSIGNED_TO, alias::UNASSIGNED),
            completed_at: fields::first_text(raw, alias::COMPLETED_AT),
        }
    }
}

impl FollowUp {
    /// Replace the status text, keeping `column` in sync
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.column = FollowUpColumn::from_status(&self.status);
    }
}

/// Create / update follow-up payload (`/api/followups`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpPayload {
    pub member_id: String,
    pub subject: String,
    #[serde(rename = "type")]
    pub kind: FollowUpType,
    pub priority: Priority,
    pub status: String,
    pub due_date: String,
    pub due_time: Option<String>,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
}
