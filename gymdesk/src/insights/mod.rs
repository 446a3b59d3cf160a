//! Dashboard view-models
//!
//! Pure reductions from normalized collections to the numbers each page
//! shows. Nothing here performs I/O; "now" and "today" are parameters.

pub mod assets;
pub mod bios;
pub mod followups;
pub mod leads;
pub mod transactions;
pub mod vouchers;

use serde::Serialize;

pub use assets::{AssetReport, build_report};
pub use bios::{BiosMetrics, BiosSources, aggregate};
pub use followups::{BoardColumn, FollowUpStats, build_stats, group_by_column};
pub use leads::{LeadStats, lead_stats};
pub use transactions::{TransactionStats, transaction_stats};
pub use vouchers::{VoucherSummary, voucher_summary};

/// A labelled bucket (condition, location, vendor, type, ...)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub label: String,
    pub count: usize,
    pub value: f64,
}

/// Group by label keeping first-seen order
pub(crate) fn group_by_label<'a, T, L, V>(items: &'a [T], label: L, value: V) -> Vec<Breakdown>
where
    L: Fn(&'a T) -> String,
    V: Fn(&T) -> f64,
{
    let mut buckets: Vec<(String, usize, rust_decimal::Decimal)> = Vec::new();
    for item in items {
        let key = label(item);
        let amount = shared::money::to_decimal(value(item));
        match buckets.iter_mut().find(|(k, _, _)| *k == key) {
            Some((_, count, total)) => {
                *count += 1;
                *total = shared::money::add(*total, amount);
            }
            None => buckets.push((key, 1, amount)),
        }
    }
    buckets
        .into_iter()
        .map(|(label, count, total)| Breakdown {
            label,
            count,
            value: shared::money::to_f64(total),
        })
        .collect()
}

/// Largest `n` by value; ties keep their original order
pub(crate) fn top_by_value(mut buckets: Vec<Breakdown>, n: usize) -> Vec<Breakdown> {
    buckets.sort_by(|a, b| b.value.total_cmp(&a.value));
    buckets.truncate(n);
    buckets
}

/// 2dp rounding for display
pub(crate) fn round2(value: f64) -> f64 {
    shared::money::to_f64(shared::money::to_decimal(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_and_top_are_stable() {
        let items = [("b", 10.0), ("a", 5.0), ("b", 1.0), ("c", 11.0), ("a", 6.0)];
        let grouped = group_by_label(&items, |(l, _)| l.to_string(), |(_, v)| *v);
        let labels: Vec<&str> = grouped.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["b", "a", "c"]);

        let top = top_by_value(grouped, 2);
        // b=11, a=11, c=11: all tie, original order kept
        let labels: Vec<&str> = top.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["b", "a"]);
        assert_eq!(top[0].count, 2);
    }
}
