//! Follow-up statistics and the kanban board

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{FollowUp, FollowUpColumn, Priority};
use shared::normalize::parse_loose_datetime;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpStats {
    pub total: usize,
    pub pending: usize,
    pub overdue: usize,
    pub due_today: usize,
    pub completed_today: usize,
    /// Same as `total`; there is no real week filter
    pub this_week: usize,
    pub high_priority: usize,
    pub completed: usize,
    /// `completed / total` as `"66.7%"`, `"0.0%"` when empty
    pub success_rate: String,
}

fn falls_on(raw: Option<&str>, day: NaiveDate) -> bool {
    raw.and_then(parse_loose_datetime)
        .is_some_and(|at| at.date_naive() == day)
}

pub fn build_stats(items: &[FollowUp], today: NaiveDate) -> FollowUpStats {
    let count = |column: FollowUpColumn| items.iter().filter(|f| f.column == column).count();
    let total = items.len();
    let completed = count(FollowUpColumn::Completed);

    let success_rate = if total == 0 {
        "0.0%".to_string()
    } else {
        format!("{:.1}%", completed as f64 / total as f64 * 100.0)
    };

    FollowUpStats {
        total,
        pending: count(FollowUpColumn::Pending),
        overdue: count(FollowUpColumn::Overdue),
        due_today: items
            .iter()
            .filter(|f| falls_on(f.due_date.as_deref(), today))
            .count(),
        completed_today: items
            .iter()
            .filter(|f| {
                f.column == FollowUpColumn::Completed && falls_on(f.completed_at.as_deref(), today)
            })
            .count(),
        this_week: total,
        high_priority: items.iter().filter(|f| f.priority == Priority::High).count(),
        completed,
        success_rate,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumn {
    pub column: FollowUpColumn,
    pub title: &'static str,
    pub items: Vec<FollowUp>,
}

/// Every column in board order, empty ones included
pub fn group_by_column(items: &[FollowUp]) -> Vec<BoardColumn> {
    FollowUpColumn::ALL
        .into_iter()
        .map(|column| BoardColumn {
            column,
            title: column.as_str(),
            items: items.iter().filter(|f| f.column == column).cloned().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::Normalize;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn sample() -> Vec<FollowUp> {
        FollowUp::normalize_all(&[
            json!({"id": 1, "status": "Pending", "dueDate": "2026-10-19", "priority": "High"}),
            json!({"id": 2, "status": "Overdue", "dueDate": "2026-10-10"}),
            json!({"id": 3, "status": "Completed", "completedAt": "2026-10-19T08:30:00Z"}),
            json!({"id": 4, "status": "completed", "completedAt": "2026-10-01"}),
            json!({"id": 5, "status": "Cancelled", "priority": "high"}),
            json!({"id": 6, "status": "Completed-Overdue"}),
        ])
    }

    #[test]
    fn test_stats() {
        let stats = build_stats(&sample(), today());
        assert_eq!(stats.total, 6);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.overdue, 2);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.due_today, 1);
        assert_eq!(stats.completed_today, 1);
        assert_eq!(stats.this_week, 6);
        assert_eq!(stats.high_priority, 2);
        assert_eq!(stats.success_rate, "33.3%");
        assert!(stats.pending + stats.overdue + stats.completed <= stats.total);
    }

    #[test]
    fn test_empty_success_rate() {
        let stats = build_stats(&[], today());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.success_rate, "0.0%");
    }

    #[test]
    fn test_board_has_every_column_in_order() {
        let board = group_by_column(&sample());
        let columns: Vec<FollowUpColumn> = board.iter().map(|c| c.column).collect();
        assert_eq!(columns, FollowUpColumn::ALL.to_vec());
        let total: usize = board.iter().map(|c| c.items.len()).sum();
        assert_eq!(total, 6);
        assert!(board.iter().any(|c| c.column == FollowUpColumn::Rescheduled && c.items.is_empty()));
    }
}
