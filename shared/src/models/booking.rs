//! Booking Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::record_id;
use crate::normalize::{Normalize, aliases, aliases::booking as alias, fields};

/// Session / class booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub member_id: Option<String>,
    pub trainer_id: Option<String>,
    pub trainer_name: Option<String>,
    pub class_id: Option<String>,
    pub status: String,
    pub date: Option<String>,
}

impl Normalize for Booking {
    fn normalize(raw: &Value) -> Self {
        Self {
            id: record_id(raw),
            member_id: fields::first_text(raw, alias::MEMBER_ID),
            trainer_id: fields::first_text(raw, alias::TRAINER_ID),
            trainer_name: fields::first_text(raw, alias::TRAINER),
            class_id: fields::first_text(raw, alias::CLASS_ID),
            status: fields::text_or(raw, aliases::STATUS, "confirmed"),
            date: fields::first_text(raw, alias::DATE),
        }
    }
}
