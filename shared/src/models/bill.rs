//! Bill Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{record_id, status_is};
use crate::normalize::{Normalize, aliases, aliases::bill as alias, fields};

/// Member bill / invoice; only paid bills count as revenue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub vendor: String,
    pub amount: f64,
    pub status: String,
    pub due_date: Option<String>,
}

impl Normalize for Bill {
    fn normalize(raw: &Value) -> Self {
        Self {
            id: record_id(raw),
            vendor: fields::text_or(raw, alias::VENDOR, ""),
            amount: fields::amount_or_zero(raw, alias::AMOUNT),
            status: fields::text_or(raw, aliases::STATUS, "unpaid"),
            due_date: fields::first_text(raw, alias::DUE_DATE),
        }
    }
}

impl Bill {
    pub fn is_paid(&self) -> bool {
        status_is(&self.status, "paid")
    }
}
