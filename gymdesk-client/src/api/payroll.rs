//! `/payroll`
//!
//! Dashboard, detail and report payloads are passed through as JSON: the
//! backend computes them and nothing downstream reshapes them.

use serde_json::Value;
use shared::ItemEnvelope;
use shared::models::{PayrollApprove, PayrollGenerate, PayrollRecord};

use super::item_path;
use crate::{ClientResult, HttpClient};

pub const PAYROLL: &str = "/payroll";

pub struct PayrollApi<'a, H> {
    pub(crate) http: &'a H,
}

impl<H: HttpClient> PayrollApi<'_, H> {
    async fn get_value(&self, path: &str) -> ClientResult<Value> {
        let envelope: ItemEnvelope<Value> = self.http.get(path).await?;
        Ok(envelope.into_inner())
    }

    pub async fn dashboard(&self) -> ClientResult<Value> {
        self.get_value("/payroll/dashboard").await
    }

    pub async fn list(&self) -> ClientResult<Vec<PayrollRecord>> {
        self.http.get_list(PAYROLL).await
    }

    pub async fn detail(&self, id: &str) -> ClientResult<Value> {
        self.get_value(&item_path(PAYROLL, id)).await
    }

    pub async fn history(&self) -> ClientResult<Vec<PayrollRecord>> {
        self.http.get_list("/payroll/history").await
    }

    pub async fn reports(&self) -> ClientResult<Value> {
        self.get_value("/payroll/reports").await
    }

    /// `POST /payroll/generate`
    pub async fn generate(&self, cycle: &PayrollGenerate) -> ClientResult<Value> {
        tracing::info!(
            month = cycle.month,
            year = cycle.year,
            staff = cycle.staff.len(),
            total_net = cycle.total_net,
            "Submitting payroll cycle"
        );
        let envelope: ItemEnvelope<Value> = self.http.post("/payroll/generate", cycle).await?;
        Ok(envelope.into_inner())
    }

    /// `POST /payroll/:id/approve`
    pub async fn approve(&self, id: &str, approval: &PayrollApprove) -> ClientResult<Value> {
        tracing::info!(payroll = id, "Approving payroll cycle");
        let path = format!("{}/approve", item_path(PAYROLL, id));
        let envelope: ItemEnvelope<Value> = self.http.post(&path, approval).await?;
        Ok(envelope.into_inner())
    }
}
