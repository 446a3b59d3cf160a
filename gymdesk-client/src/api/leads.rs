//! `/leads`

use serde_json::Value;
use shared::ItemEnvelope;
use shared::models::{BackendLeadStats, Lead, LeadPayload};

use super::item_path;
use crate::{ClientResult, HttpClient};

pub const LEADS: &str = "/leads";
pub const LEAD_STATS: &str = "/leads/stats";

pub struct LeadsApi<'a, H> {
    pub(crate) http: &'a H,
}

impl<H: HttpClient> LeadsApi<'_, H> {
    pub async fn list(&self) -> ClientResult<Vec<Lead>> {
        self.http.get_list(LEADS).await
    }

    /// Backend-computed counters; missing fields default to zero
    pub async fn stats(&self) -> ClientResult<BackendLeadStats> {
        let envelope: ItemEnvelope<Value> = self.http.get(LEAD_STATS).await?;
        Ok(serde_json::from_value(envelope.into_inner()).unwrap_or_default())
    }

    pub async fn create(&self, payload: &LeadPayload) -> ClientResult<Lead> {
        self.http.post_item(LEADS, payload).await
    }

    pub async fn update(&self, id: &str, payload: &LeadPayload) -> ClientResult<Lead> {
        self.http.put_item(&item_path(LEADS, id), payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete::<Value>(&item_path(LEADS, id)).await?;
        Ok(())
    }
}
