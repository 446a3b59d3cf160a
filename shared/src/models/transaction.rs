//! Asset Transaction Model

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::asset::Asset;
use super::common::record_id;
use crate::normalize::{Normalize, aliases, aliases::transaction as alias, fields};

/// Transaction type
///
/// Unknown spellings are kept verbatim in `Other` so that substring-based
/// rules (e.g. "Repair" counting as maintenance) still see them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    Purchase,
    Maintenance,
    Transfer,
    Assignment,
    Depreciation,
    Disposal,
    Sale,
    Insurance,
    Other(String),
}

impl TransactionType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "purchase" => Self::Purchase,
            "maintenance" => Self::Maintenance,
            "transfer" => Self::Transfer,
            "assignment" => Self::Assignment,
            "depreciation" => Self::Depreciation,
            "disposal" => Self::Disposal,
            "sale" => Self::Sale,
            "insurance" => Self::Insurance,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Purchase => "Purchase",
            Self::Maintenance => "Maintenance",
            Self::Transfer => "Transfer",
            Self::Assignment => "Assignment",
            Self::Depreciation => "Depreciation",
            Self::Disposal => "Disposal",
            Self::Sale => "Sale",
            Self::Insurance => "Insurance",
            Self::Other(raw) => raw,
        }
    }

    /// Maintenance spend: any type mentioning "maintenance" or "repair"
    pub fn is_maintenance(&self) -> bool {
        let lower = self.as_str().to_ascii_lowercase();
        lower.contains("maintenance") || lower.contains("repair")
    }
}

impl From<String> for TransactionType {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<TransactionType> for String {
    fn from(kind: TransactionType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Asset transaction entity
///
/// `status` is free-form (Pending / Active / Completed / In-Review are the
/// common values) and changes through the dedicated status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetTransaction {
    pub id: String,
    pub asset_id: Option<String>,
    pub asset_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub value: f64,
    pub date: Option<String>,
    pub status: String,
    pub location: Option<String>,
    pub assigned_to: Option<String>,
    pub vendor: Option<String>,
}

impl Normalize for AssetTransaction {
    fn normalize(raw: &Value) -> Self {
        Self {
            id: record_id(raw),
            asset_id: fields::first_text(raw, alias::ASSET_ID),
            asset_name: fields::first_text(raw, alias::ASSET_NAME),
            kind: TransactionType::parse(&fields::text_or(raw, alias::TYPE, "Other")),
            value: fields::amount_or_zero(raw, alias::VALUE),
            date: fields::first_text(raw, alias::DATE),
            status: fields::text_or(raw, aliases::STATUS, "Pending"),
            location: fields::first_text(raw, alias::LOCATION),
            assigned_to: fields::first_text(raw, alias::ASSIGNED_TO),
            vendor: fields::first_text(raw, alias::VENDOR),
        }
    }
}

/// Best-effort join: keep an embedded name, else look the asset up by id,
/// else fall back to the "Unknown Asset" placeholder
pub fn join_asset_names(transactions: &mut [AssetTransaction], assets: &[Asset]) {
    let names: HashMap<&str, &str> = assets
        .iter()
        .filter(|a| !a.id.is_empty())
        .map(|a| (a.id.as_str(), a.name.as_str()))
        .collect();
    for tx in transactions.iter_mut().filter(|t| t.asset_name.is_none()) {
        let name = tx
            .asset_id
            .as_deref()
            .and_then(|id| names.get(id).copied())
            .unwrap_or(alias::UNKNOWN_ASSET);
        tx.asset_name = Some(name.to_string());
    }
}

/// Create transaction payload (`POST /api/asset-transactions`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCreate {
    pub asset_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub value: f64,
    pub date: String,
    pub status: String,
    pub location: Option<String>,
    pub assigned_to: Option<String>,
    pub vendor: Option<String>,
    pub notes: Option<String>,
}

/// Status change payload (`PUT /api/asset-transactions/:id/status`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionStatusUpdate {
    pub status: String,
}
