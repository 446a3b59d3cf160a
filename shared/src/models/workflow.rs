//! Follow-up Workflow Model (automation templates)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::record_id;
use crate::normalize::{Normalize, aliases, fields};

/// The fixed set of automation triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerTemplate {
    NewMember,
    MembershipExpiring,
    MissedSessions,
    Birthday,
    PaymentOverdue,
    ClassBooked,
    InactiveMember,
    LeadCreated,
}

impl TriggerTemplate {
    pub const ALL: [TriggerTemplate; 8] = [
        Self::NewMember,
        Self::MembershipExpiring,
        Self::MissedSessions,
        Self::Birthday,
        Self::PaymentOverdue,
        Self::ClassBooked,
        Self::InactiveMember,
        Self::LeadCreated,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::NewMember => "new-member",
            Self::MembershipExpiring => "membership-expiring",
            Self::MissedSessions => "missed-sessions",
            Self::Birthday => "birthday",
            Self::PaymentOverdue => "payment-overdue",
            Self::ClassBooked => "class-booked",
            Self::InactiveMember => "inactive-member",
            Self::LeadCreated => "lead-created",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NewMember => "New Member Joined",
            Self::MembershipExpiring => "Membership Expiring",
            Self::MissedSessions => "Missed Sessions",
            Self::Birthday => "Member Birthday",
            Self::PaymentOverdue => "Payment Overdue",
            Self::ClassBooked => "Class Booked",
            Self::InactiveMember => "Inactive Member",
            Self::LeadCreated => "New Lead Created",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::NewMember => "Runs when a member signs up",
            Self::MembershipExpiring => "Runs a set number of days before a membership ends",
            Self::MissedSessions => "Runs after consecutive missed bookings",
            Self::Birthday => "Runs on the member's birthday",
            Self::PaymentOverdue => "Runs when an invoice passes its due date",
            Self::ClassBooked => "Runs after a class booking is confirmed",
            Self::InactiveMember => "Runs when a member has not checked in for a while",
            Self::LeadCreated => "Runs when a new lead is captured",
        }
    }

    /// Match by id or label, case-insensitive
    pub fn find(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(raw) || t.label().eq_ignore_ascii_case(raw))
    }
}

/// The fixed set of automation actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionTemplate {
    SendEmail,
    SendSms,
    SendWhatsapp,
    CreateTask,
    AssignStaff,
    PushNotification,
}

impl ActionTemplate {
    pub const ALL: [ActionTemplate; 6] = [
        Self::SendEmail,
        Self::SendSms,
        Self::SendWhatsapp,
        Self::CreateTask,
        Self::AssignStaff,
        Self::PushNotification,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::SendEmail => "send-email",
            Self::SendSms => "send-sms",
            Self::SendWhatsapp => "send-whatsapp",
            Self::CreateTask => "create-task",
            Self::AssignStaff => "assign-staff",
            Self::PushNotification => "push-notification",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SendEmail => "Send Email",
            Self::SendSms => "Send SMS",
            Self::SendWhatsapp => "Send WhatsApp",
            Self::CreateTask => "Create Follow-up Task",
            Self::AssignStaff => "Assign to Staff",
            Self::PushNotification => "Push Notification",
        }
    }

    /// Whether the action delivers the message body to the member
    pub fn sends_message(&self) -> bool {
        matches!(
            self,
            Self::SendEmail | Self::SendSms | Self::SendWhatsapp | Self::PushNotification
        )
    }

    pub fn find(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(raw) || a.label().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    #[default]
    Once,
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            _ => Self::Once,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WorkflowStatus {
    #[default]
    Active,
    Inactive,
}

/// Saved automation (`/api/followup-workflows`)
///
/// `trigger` and `action` are optional only because stored records may
/// reference templates this build does not know; the wizard always emits
/// both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub frequency: Frequency,
    pub trigger: Option<TriggerTemplate>,
    pub action: Option<ActionTemplate>,
    pub message: String,
    pub status: WorkflowStatus,
}

impl Normalize for Workflow {
    fn normalize(raw: &Value) -> Self {
        let id = record_id(raw);
        let status = fields::text_or(raw, aliases::STATUS, "Active");
        Self {
            id: (!id.is_empty()).then_some(id),
            name: fields::text_or(raw, &["name", "workflowName", "title"], ""),
            description: fields::text_or(raw, &["description"], ""),
            frequency: Frequency::parse(&fields::text_or(raw, &["frequency"], "")),
            trigger: fields::first_text(raw, &["trigger", "trigger.id", "triggerType", "trigger_type"])
                .and_then(|t| TriggerTemplate::find(&t)),
            action: fields::first_text(raw, &["action", "action.id", "actionType", "action_type"])
                .and_then(|a| ActionTemplate::find(&a)),
            message: fields::text_or(raw, &["message", "messageBody", "template"], ""),
            status: if status.eq_ignore_ascii_case("inactive") {
                WorkflowStatus::Inactive
            } else {
                WorkflowStatus::Active
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_counts() {
        assert_eq!(TriggerTemplate::ALL.len(), 8);
        assert_eq!(ActionTemplate::ALL.len(), 6);
    }

    #[test]
    fn test_template_find_by_id_or_label() {
        assert_eq!(TriggerTemplate::find("birthday"), Some(TriggerTemplate::Birthday));
        assert_eq!(TriggerTemplate::find("payment overdue"), Some(TriggerTemplate::PaymentOverdue));
        assert_eq!(ActionTemplate::find("Send SMS"), Some(ActionTemplate::SendSms));
        assert_eq!(ActionTemplate::find("fax"), None);
    }

    #[test]
    fn test_normalize_nested_trigger() {
        let w = Workflow::normalize(&json!({
            "_id": "w1",
            "workflowName": "Welcome",
            "trigger": {"id": "new-member"},
            "action": "send-email",
            "status": "Inactive"
        }));
        assert_eq!(w.id.as_deref(), Some("w1"));
        assert_eq!(w.name, "Welcome");
        assert_eq!(w.trigger, Some(TriggerTemplate::NewMember));
        assert_eq!(w.action, Some(ActionTemplate::SendEmail));
        assert_eq!(w.status, WorkflowStatus::Inactive);
    }

    #[test]
    fn test_serialized_ids() {
        let v = serde_json::to_value(TriggerTemplate::MembershipExpiring).unwrap();
        assert_eq!(v, json!("membership-expiring"));
    }
}
