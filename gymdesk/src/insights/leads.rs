//! Lead pipeline statistics

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{Lead, LeadStatus};
use shared::money::percentage;
use shared::normalize::parse_loose_datetime;

use super::round2;

/// Leads at or above this score count as hot
pub const HIGH_SCORE: u8 = 70;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: LeadStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadStats {
    pub total: usize,
    /// Pipeline order, every stage present
    pub by_status: Vec<StatusCount>,
    pub converted: usize,
    pub conversion_rate: f64,
    pub average_score: f64,
    pub high_score: usize,
    pub follow_ups_due_today: usize,
    /// Open leads whose next follow-up date has passed
    pub follow_ups_overdue: usize,
}

fn is_open(lead: &Lead) -> bool {
    !matches!(lead.status, LeadStatus::Converted | LeadStatus::Lost)
}

pub fn lead_stats(leads: &[Lead], today: NaiveDate) -> LeadStats {
    let count = |status: LeadStatus| leads.iter().filter(|l| l.status == status).count();
    let total = leads.len();
    let converted = count(LeadStatus::Converted);

    let score_sum: u32 = leads.iter().map(|l| u32::from(l.score)).sum();
    let average_score = if total == 0 {
        0.0
    } else {
        round2(f64::from(score_sum) / total as f64)
    };

    let mut due_today = 0;
    let mut overdue = 0;
    for lead in leads.iter().filter(|l| is_open(l)) {
        let Some(date) = lead
            .next_follow_up_date
            .as_deref()
            .and_then(parse_loose_datetime)
            .map(|at| at.date_naive())
        else {
            continue;
        };
        if date == today {
            due_today += 1;
        } else if date < today {
            overdue += 1;
        }
    }

    LeadStats {
        total,
        by_status: LeadStatus::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                count: count(status),
            })
            .collect(),
        converted,
        conversion_rate: round2(percentage(converted as f64, total as f64)),
        average_score,
        high_score: leads.iter().filter(|l| l.score >= HIGH_SCORE).count(),
        follow_ups_due_today: due_today,
        follow_ups_overdue: overdue,
    }
}
