//! Facility Model (branches / sites)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::record_id;
use crate::normalize::{Normalize, aliases, aliases::facility as alias, fields};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facility {
    pub id: String,
    pub name: String,
    pub location: Option<String>,
    pub capacity: Option<u32>,
    pub status: String,
}

impl Normalize for Facility {
    fn normalize(raw: &Value) -> Self {
        Self {
            id: record_id(raw),
            name: fields::text_or(raw, alias::NAME, "Branch"),
            location: fields::first_text(raw, alias::LOCATION),
            capacity: fields::first_amount(raw, alias::CAPACITY).map(|c| c.max(0.0) as u32),
            status: fields::text_or(raw, aliases::STATUS, "active"),
        }
    }
}

/// Create / update facility payload (`/facilities`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityPayload {
    pub name: String,
    pub location: Option<String>,
    pub capacity: Option<u32>,
    pub status: Option<String>,
}
