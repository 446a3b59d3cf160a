//! Asset report
//!
//! Valuation, depreciation, warranty/maintenance alerts, breakdowns and the
//! monthly spending trend.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::models::{Asset, AssetTransaction};
use shared::money::{percentage, sum_amounts, to_f64};
use shared::normalize::{days_until, parse_loose_datetime};
use shared::util::month_key;

use super::{Breakdown, group_by_label, round2, top_by_value};

/// Warranty alerts cover this many days ahead
pub const WARRANTY_WINDOW_DAYS: i64 = 30;
const TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAlert {
    pub asset_id: String,
    pub name: String,
    pub date: String,
    /// Positive: days left. Negative: days overdue.
    pub days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// `YYYY-MM`
    pub month: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetReport {
    pub asset_count: usize,
    pub total_value: f64,
    pub original_cost: f64,
    pub depreciation: f64,
    pub depreciation_percent: f64,
    pub maintenance_cost: f64,
    pub critical_warranty: Vec<AssetAlert>,
    pub overdue_maintenance: Vec<AssetAlert>,
    pub by_condition: Vec<Breakdown>,
    pub by_location: Vec<Breakdown>,
    pub by_vendor: Vec<Breakdown>,
    pub status_counts: BTreeMap<String, usize>,
    pub spending_trend: Vec<TrendPoint>,
}

fn label_or(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn alerts<'a>(
    assets: &'a [Asset],
    date_of: impl Fn(&'a Asset) -> Option<&'a str>,
    keep: impl Fn(i64) -> bool,
    now: DateTime<Utc>,
) -> Vec<AssetAlert> {
    assets
        .iter()
        .filter_map(|asset| {
            let date = date_of(asset)?;
            let days = days_until(date, now)?;
            keep(days).then(|| AssetAlert {
                asset_id: asset.id.clone(),
                name: asset.name.clone(),
                date: date.to_string(),
                days,
            })
        })
        .collect()
}

pub fn build_report(
    assets: &[Asset],
    transactions: &[AssetTransaction],
    now: DateTime<Utc>,
) -> AssetReport {
    let total_value = sum_amounts(assets.iter().map(|a| a.current_value));
    let original_cost = sum_amounts(assets.iter().map(|a| a.cost));
    let depreciation = to_f64(shared::money::sub(original_cost, total_value));
    let original_cost = to_f64(original_cost);

    let maintenance_cost = sum_amounts(
        transactions
            .iter()
            .filter(|t| t.kind.is_maintenance())
            .map(|t| t.value),
    );

    let mut status_counts = BTreeMap::new();
    for asset in assets {
        *status_counts.entry(label_or(&asset.status, "Unknown")).or_insert(0) += 1;
    }

    let mut trend: BTreeMap<String, rust_decimal::Decimal> = BTreeMap::new();
    for tx in transactions {
        let Some(at) = tx.date.as_deref().and_then(parse_loose_datetime) else {
            continue;
        };
        let bucket = trend.entry(month_key(at)).or_default();
        *bucket = shared::money::add(*bucket, shared::money::to_decimal(tx.value));
    }

    AssetReport {
        asset_count: assets.len(),
        total_value: to_f64(total_value),
        original_cost,
        depreciation,
        depreciation_percent: round2(percentage(depreciation, original_cost)),
        maintenance_cost: to_f64(maintenance_cost),
        critical_warranty: alerts(
            assets,
            |a| a.warranty_expiry.as_deref(),
            |days| days > 0 && days <= WARRANTY_WINDOW_DAYS,
            now,
        ),
        overdue_maintenance: alerts(assets, |a| a.maintenance_date.as_deref(), |days| days < 0, now),
        by_condition: top_by_value(
            group_by_label(assets, |a| label_or(&a.condition_desc, "Unknown"), |a| a.current_value),
            TOP_N,
        ),
        by_location: top_by_value(
            group_by_label(assets, |a| label_or(&a.location, "Unassigned"), |a| a.current_value),
            TOP_N,
        ),
        by_vendor: top_by_value(
            group_by_label(
                assets,
                |a| label_or(a.vendor.as_deref().unwrap_or_default(), "Unknown"),
                |a| a.current_value,
            ),
            TOP_N,
        ),
        status_counts,
        spending_trend: trend
            .into_iter()
            .map(|(month, amount)| TrendPoint {
                month,
                amount: to_f64(amount),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use shared::Normalize;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_currency_strings_scenario() {
        let assets = Asset::normalize_all(&[json!({"cost": "AED 5,000", "current_value": "AED 4,000"})]);
        let report = build_report(&assets, &[], now());
        assert_eq!(report.total_value, 4000.0);
        assert_eq!(report.original_cost, 5000.0);
        assert_eq!(report.depreciation, 1000.0);
        assert_eq!(report.depreciation_percent, 20.0);
    }

    #[test]
    fn test_depreciation_percent() {
        let assets = Asset::normalize_all(&[json!({"cost": 10000, "current_value": 7000})]);
        let report = build_report(&assets, &[], now());
        assert_eq!(report.depreciation, 3000.0);
        assert_eq!(report.depreciation_percent, 30.0);
    }

    #[test]
    fn test_empty_inputs() {
        let report = build_report(&[], &[], now());
        assert_eq!(report.asset_count, 0);
        assert_eq!(report.depreciation_percent, 0.0);
        assert!(report.spending_trend.is_empty());
    }

    #[test]
    fn test_warranty_and_maintenance_windows() {
        let assets = Asset::normalize_all(&[
            json!({"id": "a", "name": "Bike", "warranty_expiry": "2026-10-30"}),
            json!({"id": "b", "name": "Rack", "warranty_expiry": "2026-12-30"}),
            json!({"id": "c", "name": "Mat", "warranty_expiry": "2026-10-01"}),
            json!({"id": "d", "name": "Rower", "maintenance_date": "2026-10-10"}),
            json!({"id": "e", "name": "Press", "maintenance_date": "2026-11-10"}),
            json!({"id": "f", "name": "Sled", "maintenance_date": "soon"}),
        ]);
        let report = build_report(&assets, &[], now());

        assert_eq!(report.critical_warranty.len(), 1);
        assert_eq!(report.critical_warranty[0].asset_id, "a");
        assert_eq!(report.critical_warranty[0].days, 11);

        assert_eq!(report.overdue_maintenance.len(), 1);
        assert_eq!(report.overdue_maintenance[0].name, "Rower");
        assert!(report.overdue_maintenance[0].days < 0);
    }

    #[test]
    fn test_maintenance_cost_and_trend() {
        let txs = AssetTransaction::normalize_all(&[
            json!({"type": "Maintenance", "value": 200, "date": "2026-09-03"}),
            json!({"type": "Annual Repair", "value": 150, "date": "2026-08-20"}),
            json!({"type": "Purchase", "value": 5000, "date": "2026-09-15T10:00:00Z"}),
            json!({"type": "Transfer", "value": 0}),
        ]);
        let report = build_report(&[], &txs, now());
        assert_eq!(report.maintenance_cost, 350.0);

        let months: Vec<&str> = report.spending_trend.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, ["2026-08", "2026-09"]);
        assert_eq!(report.spending_trend[1].amount, 5200.0);
    }

    #[test]
    fn test_breakdowns_top_five() {
        let raw: Vec<_> = (0..7)
            .map(|i| json!({"location": format!("Zone {i}"), "current_value": i * 100, "status": "Active"}))
            .collect();
        let report = build_report(&Asset::normalize_all(&raw), &[], now());
        assert_eq!(report.by_location.len(), 5);
        assert_eq!(report.by_location[0].label, "Zone 6");
        assert_eq!(report.status_counts.get("Active"), Some(&7));
        assert_eq!(report.by_vendor[0].label, "Unknown");
    }
}
