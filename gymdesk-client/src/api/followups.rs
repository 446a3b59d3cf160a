//! `/api/followups`

use serde_json::Value;
use shared::models::{FollowUp, FollowUpPayload};

use super::item_path;
use crate::mutation::OptimisticList;
use crate::{ClientError, ClientResult, HttpClient};

pub const FOLLOWUPS: &str = "/api/followups";

pub struct FollowUpsApi<'a, H> {
    pub(crate) http: &'a H,
}

impl<H: HttpClient> FollowUpsApi<'_, H> {
    pub async fn list(&self) -> ClientResult<Vec<FollowUp>> {
        self.http.get_list(FOLLOWUPS).await
    }

    pub async fn create(&self, payload: &FollowUpPayload) -> ClientResult<FollowUp> {
        self.http.post_item(FOLLOWUPS, payload).await
    }

    pub async fn update(&self, id: &str, payload: &FollowUpPayload) -> ClientResult<FollowUp> {
        self.http.put_item(&item_path(FOLLOWUPS, id), payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete::<Value>(&item_path(FOLLOWUPS, id)).await?;
        Ok(())
    }

    /// Drop the card from the board first; it comes back in place on failure
    pub async fn delete_optimistic(
        &self,
        list: &mut OptimisticList<FollowUp>,
        id: &str,
    ) -> ClientResult<()> {
        let Some(ticket) = list.remove(id) else {
            return Err(ClientError::NotFound(format!("follow-up {id}")));
        };
        list.settle(ticket, self.delete(id)).await
    }
}
