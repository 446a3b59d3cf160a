//! Production Models (juice bar / kitchen recipes and batches)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::record_id;
use crate::money::{add, div, mul, to_decimal, to_f64};
use crate::normalize::{Normalize, aliases, aliases::production as alias, fields};

/// Recipe ingredient line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_cost: f64,
}

impl Normalize for Ingredient {
    fn normalize(raw: &Value) -> Self {
        Self {
            name: fields::text_or(raw, alias::INGREDIENT_NAME, "Ingredient"),
            quantity: fields::amount_or_zero(raw, alias::QUANTITY),
            unit: fields::text_or(raw, alias::UNIT, "unit"),
            unit_cost: fields::amount_or_zero(raw, alias::UNIT_COST),
        }
    }
}

impl Ingredient {
    pub fn line_cost(&self) -> f64 {
        to_f64(mul(to_decimal(self.quantity), to_decimal(self.unit_cost)))
    }
}

/// Production recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub ingredients: Vec<Ingredient>,
    /// Units produced by one run of the recipe
    pub yield_quantity: f64,
    pub yield_unit: String,
    pub status: String,
}

impl Normalize for Recipe {
    fn normalize(raw: &Value) -> Self {
        Self {
            id: record_id(raw),
            name: fields::text_or(raw, alias::NAME, "Recipe"),
            category: fields::first_text(raw, alias::CATEGORY),
            ingredients: Ingredient::normalize_all(fields::first_array(raw, alias::INGREDIENTS)),
            yield_quantity: fields::first_amount(raw, alias::YIELD_QUANTITY).unwrap_or(1.0),
            yield_unit: fields::text_or(raw, alias::YIELD_UNIT, "unit"),
            status: fields::text_or(raw, aliases::STATUS, "active"),
        }
    }
}

impl Recipe {
    /// Ingredient cost of one run
    pub fn total_cost(&self) -> f64 {
        let total = self
            .ingredients
            .iter()
            .map(|i| mul(to_decimal(i.quantity), to_decimal(i.unit_cost)))
            .fold(rust_decimal::Decimal::ZERO, add);
        to_f64(total)
    }

    /// Cost per produced unit (0 when the yield is not positive or rounds to zero)
    pub fn unit_cost(&self) -> f64 {
        if self.yield_quantity > 0.0 {
            to_f64(div(to_decimal(self.total_cost()), to_decimal(self.yield_quantity)))
        } else {
            0.0
        }
    }
}

/// Create / update recipe payload (`/api/production-recipes`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePayload {
    pub name: String,
    pub category: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub yield_quantity: f64,
    pub yield_unit: String,
}

/// Production batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductionBatch {
    pub id: String,
    pub recipe_id: Option<String>,
    pub recipe_name: Option<String>,
    pub quantity: f64,
    pub status: String,
    pub produced_at: Option<String>,
}

impl Normalize for ProductionBatch {
    fn normalize(raw: &Value) -> Self {
        Self {
            id: record_id(raw),
            recipe_id: fields::first_text(raw, alias::RECIPE_ID),
            recipe_name: fields::first_text(raw, alias::RECIPE_NAME),
            quantity: fields::amount_or_zero(raw, alias::QUANTITY),
            status: fields::text_or(raw, aliases::STATUS, "planned"),
            produced_at: fields::first_text(raw, alias::PRODUCED_AT),
        }
    }
}

/// Create / update batch payload (`/api/production-batches`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPayload {
    pub recipe_id: String,
    pub quantity: f64,
    pub status: String,
    pub produced_at: Option<String>,
}
