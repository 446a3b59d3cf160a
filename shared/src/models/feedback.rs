//! Member Experience Model (feedback sessions)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::record_id;
use crate::normalize::{Normalize, aliases, aliases::feedback as alias, fields};

/// NPS bucket of a `return_score`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NpsCategory {
    /// 9-10
    Promoter,
    /// 7-8
    Passive,
    /// 0-6
    Detractor,
}

impl NpsCategory {
    /// Lowest return score counted as a promoter
    pub const PROMOTER_MIN: f64 = 9.0;
    /// Lowest return score counted as passive
    pub const PASSIVE_MIN: f64 = 7.0;

    pub fn classify(return_score: f64) -> Self {
        if return_score >= Self::PROMOTER_MIN {
            Self::Promoter
        } else if return_score >= Self::PASSIVE_MIN {
            Self::Passive
        } else {
            Self::Detractor
        }
    }
}

/// Experience session (`/api/experience/sessions`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceSession {
    pub id: String,
    pub member_id: Option<String>,
    pub staff_id: Option<String>,
    /// Satisfaction rating (1-5)
    pub rating: Option<f64>,
    /// Likelihood to return (0-10), the NPS input
    pub return_score: Option<f64>,
    pub comment: Option<String>,
    pub created_at: Option<String>,
}

impl Normalize for ExperienceSession {
    fn normalize(raw: &Value) -> Self {
        Self {
            id: record_id(raw),
            member_id: fields::first_text(raw, alias::MEMBER_ID),
            staff_id: fields::first_text(raw, alias::STAFF_ID),
            rating: fields::first_amount(raw, alias::RATING),
            return_score: fields::first_amount(raw, alias::RETURN_SCORE),
            comment: fields::first_text(raw, alias::COMMENT),
            created_at: fields::first_text(raw, aliases::CREATED_AT),
        }
    }
}

/// Create session payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceSessionCreate {
    pub member_id: String,
    pub trainer_id: Option<String>,
    pub rating: f64,
    pub return_score: f64,
    pub comment: Option<String>,
}
