//! Dashboard Service - loads, reduces and mutates on behalf of each page
//!
//! Two loading policies, chosen per page:
//! - BiOS, assets and transactions load tolerantly; a failed source is
//!   rendered as empty and listed in the view's degraded sources.
//! - Everything else loads strictly; the first failure aborts the page.

use chrono::Utc;
use gymdesk_client::{
    ClientConfig, Degraded, GymClient, HttpClient, NetworkHttpClient, SessionHandle, tolerant,
};
use serde::Serialize;
use serde_json::Value;
use shared::models::{
    AssetTransaction, BackendLeadStats, Lead, PayrollApprove, PayrollRecord,
    ProductionBatch, Recipe, Workflow, join_asset_names,
};
use shared::util::today;

use crate::insights::{
    AssetReport, BiosMetrics, BiosSources, BoardColumn, FollowUpStats, LeadStats, TransactionStats,
    VoucherSummary, aggregate, build_report, build_stats, group_by_column, lead_stats,
    transaction_stats, voucher_summary,
};
use crate::payroll::PayrollCycle;
use crate::utils::AppResult;
use crate::workflow::WorkflowWizard;

/// Actor recorded in audit entries when none is configured
pub const DEFAULT_ACTOR: &str = "dashboard";

// =============================================================================
// Views
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetOverview {
    #[serde(flatten)]
    pub report: AssetReport,
    pub degraded_sources: Degraded,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBoard {
    pub items: Vec<AssetTransaction>,
    pub stats: TransactionStats,
    pub degraded_sources: Degraded,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpBoard {
    pub stats: FollowUpStats,
    pub columns: Vec<BoardColumn>,
    pub workflows: Vec<Workflow>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadOverview {
    pub leads: Vec<Lead>,
    pub stats: LeadStats,
    /// What the backend reports, shown next to the locally computed numbers
    pub backend: BackendLeadStats,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherOverview {
    pub payments: VoucherSummary,
    pub receipts: VoucherSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCost {
    pub id: String,
    pub name: String,
    pub ingredients: usize,
    pub total_cost: f64,
    pub unit_cost: f64,
    pub yield_quantity: f64,
    pub yield_unit: String,
}

impl From<&Recipe> for RecipeCost {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.len(),
            total_cost: recipe.total_cost(),
            unit_cost: recipe.unit_cost(),
            yield_quantity: recipe.yield_quantity,
            yield_unit: recipe.yield_unit.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionOverview {
    pub recipes: Vec<RecipeCost>,
    pub batches: Vec<ProductionBatch>,
}

// =============================================================================
// Service
// =============================================================================

#[derive(Debug, Clone)]
pub struct DashboardService<H: HttpClient = NetworkHttpClient> {
    client: GymClient<H>,
    working_days: u32,
    actor: String,
}

impl DashboardService<NetworkHttpClient> {
    pub fn from_config(config: &ClientConfig, working_days: u32) -> AppResult<Self> {
        Ok(Self::new(GymClient::from_config(config)?, working_days))
    }

    pub fn with_session(
        config: &ClientConfig,
        session: SessionHandle,
        working_days: u32,
    ) -> AppResult<Self> {
        Ok(Self::new(GymClient::with_session(config, session)?, working_days))
    }
}

impl<H: HttpClient> DashboardService<H> {
    pub fn new(client: GymClient<H>, working_days: u32) -> Self {
        Self {
            client,
            working_days,
            actor: DEFAULT_ACTOR.to_string(),
        }
    }

    /// Name recorded as the actor of audited operations
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = actor.into();
        self
    }

    pub fn client(&self) -> &GymClient<H> {
        &self.client
    }

    // ========== Tolerant loads ==========

    /// Fetch all thirteen BiOS collections concurrently
    pub async fn load_bios_sources(&self) -> (BiosSources, Degraded) {
        // API handles must outlive the join! bindings
        let c = &self.client;
        let dir = c.directory();
        let (receipts_api, payments_api) = (c.receipt_vouchers(), c.payment_vouchers());
        let (leads_api, staff_api, assets_api) = (c.leads(), c.staff(), c.assets());
        let (experience_api, facilities_api) = (c.experience(), c.facilities());
        let (
            receipts,
            payments,
            bills,
            members,
            leads,
            staff,
            bookings,
            classes,
            assets,
            feedback,
            facilities,
            products,
            plans,
        ) = futures::join!(
            tolerant("receipts", receipts_api.list()),
            tolerant("payments", payments_api.list()),
            tolerant("bills", dir.bills()),
            tolerant("members", dir.members()),
            tolerant("leads", leads_api.list()),
            tolerant("staff", staff_api.list()),
            tolerant("bookings", dir.bookings()),
            tolerant("classes", dir.classes()),
            tolerant("assets", assets_api.list()),
            tolerant("feedback", experience_api.list_sessions()),
            tolerant("facilities", facilities_api.list()),
            tolerant("products", dir.products()),
            tolerant("plans", dir.membership_plans()),
        );

        let mut degraded = Degraded::default();
        let sources = BiosSources {
            receipts: receipts.take(&mut degraded),
            payments: payments.take(&mut degraded),
            bills: bills.take(&mut degraded),
            members: members.take(&mut degraded),
            leads: leads.take(&mut degraded),
            staff: staff.take(&mut degraded),
            bookings: bookings.take(&mut degraded),
            classes: classes.take(&mut degraded),
            assets: assets.take(&mut degraded),
            feedback: feedback.take(&mut degraded),
            facilities: facilities.take(&mut degraded),
            products: products.take(&mut degraded),
            plans: plans.take(&mut degraded),
        };
        (sources, degraded)
    }

    /// BiOS overview; never fails, failed sources are listed instead
    pub async fn bios(&self) -> BiosMetrics {
        let (sources, degraded) = self.load_bios_sources().await;
        let mut metrics = aggregate(&sources);
        metrics.degraded_sources = degraded.sources().into_iter().map(String::from).collect();
        if !degraded.is_empty() {
            tracing::warn!(sources = ?metrics.degraded_sources, "BiOS rendered with degraded sources");
        }
        metrics
    }

    pub async fn asset_report(&self) -> AssetOverview {
        let (assets_api, transactions_api) = (self.client.assets(), self.client.transactions());
        let (assets, transactions) = futures::join!(
            tolerant("assets", assets_api.list()),
            tolerant("transactions", transactions_api.list()),
        );
        let mut degraded = Degraded::default();
        let assets = assets.take(&mut degraded);
        let transactions = transactions.take(&mut degraded);

        AssetOverview {
            report: build_report(&assets, &transactions, Utc::now()),
            degraded_sources: degraded,
        }
    }

    /// Transactions with asset names filled in from the asset list
    pub async fn transactions(&self) -> TransactionBoard {
        let (transactions_api, assets_api) = (self.client.transactions(), self.client.assets());
        let (transactions, assets) = futures::join!(
            tolerant("transactions", transactions_api.list()),
            tolerant("assets", assets_api.list()),
        );
        let mut degraded = Degraded::default();
        let mut items = transactions.take(&mut degraded);
        let assets = assets.take(&mut degraded);
        join_asset_names(&mut items, &assets);

        TransactionBoard {
            stats: transaction_stats(&items),
            items,
            degraded_sources: degraded,
        }
    }

    // ========== Strict loads ==========

    pub async fn followups(&self) -> AppResult<FollowUpBoard> {
        let (followups, workflows) = (self.client.followups(), self.client.workflows());
        let (items, workflows) = futures::try_join!(followups.list(), workflows.list())?;
        Ok(FollowUpBoard {
            stats: build_stats(&items, today()),
            columns: group_by_column(&items),
            workflows,
        })
    }

    pub async fn leads(&self) -> AppResult<LeadOverview> {
        let api = self.client.leads();
        let (leads, backend) = futures::try_join!(api.list(), api.stats())?;
        Ok(LeadOverview {
            stats: lead_stats(&leads, today()),
            leads,
            backend,
        })
    }

    pub async fn vouchers(&self) -> AppResult<VoucherOverview> {
        let (payments, receipts) = (self.client.payment_vouchers(), self.client.receipt_vouchers());
        let (payments, receipts) = futures::try_join!(payments.list(), receipts.list())?;
        Ok(VoucherOverview {
            payments: voucher_summary(&payments),
            receipts: voucher_summary(&receipts),
        })
    }

    pub async fn production(&self) -> AppResult<ProductionOverview> {
        let production = self.client.production();
        let (recipes, batches) = futures::try_join!(production.recipes(), production.batches())?;
        Ok(ProductionOverview {
            recipes: recipes.iter().map(RecipeCost::from).collect(),
            batches,
        })
    }

    // ========== Payroll ==========

    /// Compute the cycle from the current staff list without submitting it
    pub async fn payroll_preview(&self, month: u32, year: i32) -> AppResult<PayrollCycle> {
        let staff = self.client.staff().list().await?;
        Ok(PayrollCycle::generate(month, year, self.working_days, &staff)?)
    }

    /// Compute and submit a cycle
    ///
    /// An empty staff list is refused before `POST /payroll/generate`.
    pub async fn generate_payroll(&self, month: u32, year: i32) -> AppResult<Value> {
        let cycle = self.payroll_preview(month, year).await?;
        let payload = cycle.to_payload();
        let created = self.client.payroll().generate(&payload).await?;

        crate::audit_log!(
            self.actor.as_str(),
            "generate",
            format!("payroll:{}", cycle.period()).as_str(),
            format!("staff={} net={}", payload.staff.len(), payload.total_net).as_str()
        );
        Ok(created)
    }

    pub async fn approve_payroll(&self, id: &str, approval: &PayrollApprove) -> AppResult<Value> {
        let approved = self.client.payroll().approve(id, approval).await?;
        crate::audit_log!(
            self.actor.as_str(),
            "approve",
            format!("payroll:{id}").as_str(),
            approval.notes.as_deref().unwrap_or("")
        );
        Ok(approved)
    }

    pub async fn payroll_history(&self) -> AppResult<Vec<PayrollRecord>> {
        Ok(self.client.payroll().history().await?)
    }

    // ========== Workflows ==========

    /// Save the wizard's workflow: update when editing, create otherwise
    pub async fn save_workflow(&self, wizard: &mut WorkflowWizard) -> AppResult<Workflow> {
        let workflow = wizard.save()?;
        let saved = match workflow.id.as_deref() {
            Some(id) => self.client.workflows().update(id, &workflow).await?,
            None => self.client.workflows().create(&workflow).await?,
        };
        tracing::info!(name = %saved.name, id = ?saved.id, "Workflow saved");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::Normalize;
    use shared::models::Asset;

    #[test]
    fn test_join_asset_names() {
        let assets = Asset::normalize_all(&[json!({"id": "a1", "name": "Treadmill"})]);
        let mut txs = AssetTransaction::normalize_all(&[
            json!({"id": "t1", "assetId": "a1"}),
            json!({"id": "t2", "assetId": "a1", "assetName": "Kept"}),
            json!({"id": "t3", "assetId": "missing"}),
        ]);
        join_asset_names(&mut txs, &assets);

        assert_eq!(txs[0].asset_name.as_deref(), Some("Treadmill"));
        assert_eq!(txs[1].asset_name.as_deref(), Some("Kept"));
        assert_eq!(txs[2].asset_name.as_deref(), Some("Unknown Asset"));
        let row = serde_json::to_value(&txs[2]).unwrap();
        assert_eq!(row["assetName"], "Unknown Asset");
    }

    #[test]
    fn test_recipe_cost_view() {
        let recipe = Recipe::normalize(&json!({
            "id": "r1",
            "name": "Protein Shake",
            "ingredients": [{"qty": 2, "cost": 3}],
            "yield": 4
        }));
        let view = RecipeCost::from(&recipe);
        assert_eq!(view.total_cost, 6.0);
        assert_eq!(view.unit_cost, 1.5);
        assert_eq!(view.ingredients, 1);
    }
}
