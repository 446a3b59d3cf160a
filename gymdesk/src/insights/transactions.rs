//! Asset transaction statistics

use serde::Serialize;
use shared::models::AssetTransaction;
use shared::money::{sum_amounts, to_f64};

use super::{Breakdown, group_by_label};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStats {
    pub total: usize,
    pub total_value: f64,
    pub pending: usize,
    pub active: usize,
    pub completed: usize,
    pub in_review: usize,
    /// Statuses outside the four known ones
    pub other: usize,
    pub pending_value: f64,
    pub maintenance_cost: f64,
    /// Per type, first-seen order
    pub by_type: Vec<Breakdown>,
}

/// Canonical status bucket: "In Review", "in_review" and "IN-REVIEW" are one
fn status_key(status: &str) -> String {
    status
        .trim()
        .to_ascii_lowercase()
        .replace([' ', '_'], "-")
}

pub fn transaction_stats(items: &[AssetTransaction]) -> TransactionStats {
    let mut stats = TransactionStats {
        total: items.len(),
        total_value: to_f64(sum_amounts(items.iter().map(|t| t.value))),
        ..Default::default()
    };

    let mut pending_values = Vec::new();
    for tx in items {
        match status_key(&tx.status).as_str() {
            "pending" => {
                stats.pending += 1;
                pending_values.push(tx.value);
            }
            "active" => stats.active += 1,
            "completed" => stats.completed += 1,
            "in-review" => stats.in_review += 1,
            _ => stats.other += 1,
        }
    }
    stats.pending_value = to_f64(sum_amounts(pending_values));
    stats.maintenance_cost = to_f64(sum_amounts(
        items.iter().filter(|t| t.kind.is_maintenance()).map(|t| t.value),
    ));
    stats.by_type = group_by_label(items, |t| t.kind.as_str().to_string(), |t| t.value);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::Normalize;

    #[test]
    fn test_counts_and_values() {
        let items = AssetTransaction::normalize_all(&[
            json!({"type": "Purchase", "value": 1000, "status": "Pending"}),
            json!({"type": "Purchase", "value": "AED 500", "status": "Completed"}),
            json!({"type": "Maintenance", "value": 120.5, "status": "in review"}),
            json!({"type": "Insurance", "value": 80, "status": "Active"}),
            json!({"type": "Repair", "value": 40, "status": "Rejected"}),
        ]);
        let stats = transaction_stats(&items);

        assert_eq!(stats.total, 5);
        assert_eq!(stats.total_value, 1740.5);
        assert_eq!((stats.pending, stats.active, stats.completed, stats.in_review, stats.other), (1, 1, 1, 1, 1));
        assert_eq!(stats.pending_value, 1000.0);
        assert_eq!(stats.maintenance_cost, 160.5);

        assert_eq!(stats.by_type[0].label, "Purchase");
        assert_eq!(stats.by_type[0].count, 2);
        assert_eq!(stats.by_type[0].value, 1500.0);
        assert_eq!(stats.by_type.len(), 4);
    }

    #[test]
    fn test_empty() {
        assert_eq!(transaction_stats(&[]), TransactionStats::default());
    }
}
