//! Catalog Models: classes, products, membership plans
//!
//! The dashboard only counts these and reads a few numbers off them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::record_id;
use crate::normalize::{Normalize, aliases, aliases::catalog as alias, fields};

/// Group class on the timetable
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FitnessClass {
    pub id: String,
    pub name: String,
    pub trainer_id: Option<String>,
    pub capacity: Option<u32>,
}

impl Normalize for FitnessClass {
    fn normalize(raw: &Value) -> Self {
        Self {
            id: record_id(raw),
            name: fields::text_or(raw, alias::NAME, "Class"),
            trainer_id: fields::first_text(raw, alias::TRAINER_ID),
            capacity: fields::first_amount(raw, alias::CAPACITY).map(|c| c.max(0.0) as u32),
        }
    }
}

/// Retail product (supplements, merchandise)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: f64,
}

impl Normalize for Product {
    fn normalize(raw: &Value) -> Self {
        Self {
            id: record_id(raw),
            name: fields::text_or(raw, alias::NAME, "Product"),
            price: fields::amount_or_zero(raw, alias::PRICE),
            stock: fields::amount_or_zero(raw, alias::STOCK),
        }
    }
}

impl Product {
    pub fn inventory_value(&self) -> f64 {
        self.price * self.stock
    }
}

/// Membership plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPlan {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub duration: Option<f64>,
    pub is_active: bool,
}

impl Normalize for MembershipPlan {
    fn normalize(raw: &Value) -> Self {
        let is_active = fields::first_bool(raw, &["isActive", "is_active", "active"]).unwrap_or_else(|| {
            !fields::text_or(raw, aliases::STATUS, "active").eq_ignore_ascii_case("inactive")
        });
        Self {
            id: record_id(raw),
            name: fields::text_or(raw, alias::NAME, "Plan"),
            price: fields::amount_or_zero(raw, alias::PRICE),
            duration: fields::first_amount(raw, alias::DURATION),
            is_active,
        }
    }
}
