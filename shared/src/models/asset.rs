//! Asset Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::record_id;
use crate::money::percentage;
use crate::normalize::{Normalize, aliases, aliases::asset as alias, fields};

/// Asset entity
///
/// Depreciation is never stored: it is `cost - current_value`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Original purchase cost
    pub cost: f64,
    pub current_value: f64,
    pub condition_desc: String,
    pub warranty_expiry: Option<String>,
    pub maintenance_date: Option<String>,
    pub location: String,
    pub status: String,
    pub vendor: Option<String>,
}

impl Normalize for Asset {
    fn normalize(raw: &Value) -> Self {
        Self {
            id: record_id(raw),
            name: fields::text_or(raw, alias::NAME, "Unnamed Asset"),
            category: fields::text_or(raw, alias::CATEGORY, "Uncategorized"),
            cost: fields::amount_or_zero(raw, alias::COST),
            current_value: fields::amount_or_zero(raw, alias::CURRENT_VALUE),
            condition_desc: fields::text_or(raw, alias::CONDITION, "Unknown"),
            warranty_expiry: fields::first_text(raw, alias::WARRANTY),
            maintenance_date: fields::first_text(raw, alias::MAINTENANCE),
            location: fields::text_or(raw, alias::LOCATION, "Unassigned"),
            status: fields::text_or(raw, aliases::STATUS, "Active"),
            vendor: fields::first_text(raw, alias::VENDOR),
        }
    }
}

impl Asset {
    /// Value lost since purchase
    pub fn depreciation(&self) -> f64 {
        self.cost - self.current_value
    }

    /// Depreciation as a percentage of cost (0 when cost is 0)
    pub fn depreciation_percent(&self) -> f64 {
        percentage(self.depreciation(), self.cost)
    }
}

/// Create / update asset payload (`/api/assets`), snake_case on the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetPayload {
    pub name: String,
    pub category: Option<String>,
    pub cost: f64,
    pub current_value: f64,
    pub condition_desc: Option<String>,
    pub warranty_expiry: Option<String>,
    pub maintenance_date: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub vendor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_depreciation() {
        let a = Asset::normalize(&json!({"cost": 10000, "current_value": 7000}));
        assert_eq!(a.depreciation(), 3000.0);
        assert_eq!(a.depreciation_percent(), 30.0);
    }

    #[test]
    fn test_currency_strings() {
        let a = Asset::normalize(&json!({"cost": "AED 5,000", "current_value": "AED 4,000"}));
        assert_eq!(a.cost, 5000.0);
        assert_eq!(a.current_value, 4000.0);
        assert_eq!(a.depreciation(), 1000.0);
    }

    #[test]
    fn test_zero_cost_percent() {
        let a = Asset::normalize(&json!({"current_value": 100}));
        assert_eq!(a.depreciation_percent(), 0.0);
    }
}
