//! Business intelligence overview (BiOS)
//!
//! Cross-source KPIs over thirteen collections. Every input may be empty;
//! the service layer loads them tolerantly and records which ones fell
//! back, this module only reduces.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{
    Asset, Bill, Booking, ExperienceSession, Facility, FitnessClass, Lead, LeadStatus, Member,
    MembershipPlan, NpsCategory, Product, Staff, Voucher,
};
use shared::money::{add, div, mul, percentage, sub, sum_amounts, to_decimal, to_f64};

use super::round2;

/// Rating assumed for staff nobody has rated yet
pub const DEFAULT_STAFF_RATING: f64 = 5.0;
pub const MAX_STAFF_SCORE: f64 = 100.0;

/// All inputs of the overview, one field per backend collection
#[derive(Debug, Clone, Default)]
pub struct BiosSources {
    pub receipts: Vec<Voucher>,
    pub payments: Vec<Voucher>,
    pub bills: Vec<Bill>,
    pub members: Vec<Member>,
    pub leads: Vec<Lead>,
    pub staff: Vec<Staff>,
    pub bookings: Vec<Booking>,
    pub classes: Vec<FitnessClass>,
    pub assets: Vec<Asset>,
    pub feedback: Vec<ExperienceSession>,
    pub facilities: Vec<Facility>,
    pub products: Vec<Product>,
    pub plans: Vec<MembershipPlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Financials {
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    /// Percent of revenue, 0 when there is no revenue
    pub margin: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberMetrics {
    pub total: usize,
    pub active: usize,
    pub retention_rate: f64,
    pub churn_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffScore {
    pub staff_id: String,
    pub name: String,
    pub role: String,
    pub sessions: usize,
    pub rating: f64,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetPromoter {
    pub promoters: usize,
    pub passives: usize,
    pub detractors: usize,
    pub responses: usize,
    /// -100..=100
    pub score: i64,
}

/// Even split of the totals across facilities
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchShare {
    pub facility_id: String,
    pub name: String,
    pub revenue: f64,
    pub members: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFunnel {
    pub total: usize,
    pub converted: usize,
    pub lost: usize,
    pub conversion_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operations {
    pub bookings: usize,
    pub classes: usize,
    pub products: usize,
    pub active_plans: usize,
    pub facilities: usize,
    pub assets: usize,
    pub asset_value: f64,
    pub inventory_value: f64,
    pub unpaid_bills: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiosMetrics {
    pub financials: Financials,
    pub members: MemberMetrics,
    /// Highest score first
    pub staff: Vec<StaffScore>,
    pub nps: NetPromoter,
    pub branches: Vec<BranchShare>,
    pub leads: LeadFunnel,
    pub operations: Operations,
    /// Mean feedback rating, 0 without feedback
    pub average_rating: f64,
    /// Collections that failed to load and were treated as empty
    pub degraded_sources: Vec<String>,
}

pub fn aggregate(sources: &BiosSources) -> BiosMetrics {
    let financials = financials(sources);
    let members = member_metrics(&sources.members);
    let branches = branch_shares(&sources.facilities, financials.revenue, members.total);

    BiosMetrics {
        staff: staff_scores(&sources.staff, &sources.bookings, &sources.feedback),
        nps: net_promoter(&sources.feedback),
        leads: lead_funnel(&sources.leads),
        operations: operations(sources),
        average_rating: mean(sources.feedback.iter().filter_map(|f| f.rating)).unwrap_or(0.0),
        degraded_sources: Vec::new(),
        financials,
        members,
        branches,
    }
}

// ============================================================================
// Sections
// ============================================================================

fn financials(sources: &BiosSources) -> Financials {
    let receipts = sum_amounts(sources.receipts.iter().map(|r| r.amount));
    let paid_bills = sum_amounts(sources.bills.iter().filter(|b| b.is_paid()).map(|b| b.amount));
    let revenue = add(receipts, paid_bills);
    let expenses = sum_amounts(sources.payments.iter().map(|p| p.amount));
    let profit = sub(revenue, expenses);
    let margin = if revenue > Decimal::ZERO {
        to_f64(mul(div(profit, revenue), Decimal::ONE_HUNDRED))
    } else {
        0.0
    };

    Financials {
        revenue: to_f64(revenue),
        expenses: to_f64(expenses),
        profit: to_f64(profit),
        margin,
    }
}

fn member_metrics(members: &[Member]) -> MemberMetrics {
    let total = members.len();
    let active = members.iter().filter(|m| m.is_active).count();
    if total == 0 {
        return MemberMetrics::default();
    }
    let retention = percentage(active as f64, total as f64);
    MemberMetrics {
        total,
        active,
        retention_rate: round2(retention),
        churn_rate: round2(100.0 - retention),
    }
}

fn staff_scores(staff: &[Staff], bookings: &[Booking], feedback: &[ExperienceSession]) -> Vec<StaffScore> {
    let mut scores: Vec<StaffScore> = staff
        .iter()
        .map(|member| {
            let sessions = bookings
                .iter()
                .filter(|b| member.matches_trainer(b.trainer_id.as_deref(), b.trainer_name.as_deref()))
                .count();
            let rating = mean(
                feedback
                    .iter()
                    .filter(|f| !member.id.is_empty() && f.staff_id.as_deref() == Some(member.id.as_str()))
                    .filter_map(|f| f.rating),
            )
            .unwrap_or(DEFAULT_STAFF_RATING);
            let score = (sessions as f64 * 2.0 + rating * 10.0).min(MAX_STAFF_SCORE);

            StaffScore {
                staff_id: member.id.clone(),
                name: member.name.clone(),
                role: member.role.clone(),
                sessions,
                rating,
                score: round2(score),
            }
        })
        .collect();
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores
}

fn net_promoter(feedback: &[ExperienceSession]) -> NetPromoter {
    let responses: Vec<NpsCategory> = feedback
        .iter()
        .filter_map(|f| f.return_score)
        .map(NpsCategory::classify)
        .collect();
    let count = |category: NpsCategory| responses.iter().filter(|&&c| c == category).count();
    let (promoters, passives, detractors) = (
        count(NpsCategory::Promoter),
        count(NpsCategory::Passive),
        count(NpsCategory::Detractor),
    );

    let score = if responses.is_empty() {
        0
    } else {
        let raw = (promoters as f64 - detractors as f64) / responses.len() as f64 * 100.0;
        // half toward +inf, same as the dashboard's display rounding
        (raw + 0.5).floor() as i64
    };

    NetPromoter {
        promoters,
        passives,
        detractors,
        responses: responses.len(),
        score,
    }
}

fn branch_shares(facilities: &[Facility], revenue: f64, members: usize) -> Vec<BranchShare> {
    if facilities.is_empty() {
        return Vec::new();
    }
    let count = facilities.len();
    let revenue_each = to_f64(div(to_decimal(revenue), Decimal::from(count)));
    facilities
        .iter()
        .map(|f| BranchShare {
            facility_id: f.id.clone(),
            name: f.name.clone(),
            revenue: revenue_each,
            members: members / count,
        })
        .collect()
}

fn lead_funnel(leads: &[Lead]) -> LeadFunnel {
    let converted = leads.iter().filter(|l| l.status == LeadStatus::Converted).count();
    LeadFunnel {
        total: leads.len(),
        converted,
        lost: leads.iter().filter(|l| l.status == LeadStatus::Lost).count(),
        conversion_rate: round2(percentage(converted as f64, leads.len() as f64)),
    }
}

fn operations(sources: &BiosSources) -> Operations {
    Operations {
        bookings: sources.bookings.len(),
        classes: sources.classes.len(),
        products: sources.products.len(),
        active_plans: sources.plans.iter().filter(|p| p.is_active).count(),
        facilities: sources.facilities.len(),
        assets: sources.assets.len(),
        asset_value: to_f64(sum_amounts(sources.assets.iter().map(|a| a.current_value))),
        inventory_value: to_f64(sum_amounts(sources.products.iter().map(Product::inventory_value))),
        unpaid_bills: to_f64(sum_amounts(
            sources.bills.iter().filter(|b| !b.is_paid()).map(|b| b.amount),
        )),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((Decimal::ZERO, 0u32), |(sum, n), v| (add(sum, to_decimal(v)), n + 1));
    (n > 0).then(|| to_f64(div(sum, Decimal::from(n))))
}
