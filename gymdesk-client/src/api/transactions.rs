//! `/api/asset-transactions`

use serde_json::Value;
use shared::models::{AssetTransaction, TransactionCreate, TransactionStatusUpdate};

use super::item_path;
use crate::mutation::OptimisticList;
use crate::{ClientResult, HttpClient};

pub const TRANSACTIONS: &str = "/api/asset-transactions";

pub struct TransactionsApi<'a, H> {
    pub(crate) http: &'a H,
}

impl<H: HttpClient> TransactionsApi<'_, H> {
    pub async fn list(&self) -> ClientResult<Vec<AssetTransaction>> {
        self.http.get_list(TRANSACTIONS).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<AssetTransaction> {
        self.http.get_item(&item_path(TRANSACTIONS, id)).await
    }

    pub async fn create(&self, payload: &TransactionCreate) -> ClientResult<AssetTransaction> {
        self.http.post_item(TRANSACTIONS, payload).await
    }

    pub async fn update(
        &self,
        id: &str,
        payload: &TransactionCreate,
    ) -> ClientResult<AssetTransaction> {
        self.http.put_item(&item_path(TRANSACTIONS, id), payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete::<Value>(&item_path(TRANSACTIONS, id)).await?;
        Ok(())
    }

    /// `PUT /api/asset-transactions/:id/status`
    pub async fn update_status(&self, id: &str, status: &str) -> ClientResult<AssetTransaction> {
        let path = format!("{}/status", item_path(TRANSACTIONS, id));
        let body = TransactionStatusUpdate {
            status: status.to_string(),
        };
        self.http.put_item(&path, &body).await
    }

    /// Change the status locally first, roll back if the server refuses
    ///
    /// On success the local row is replaced by the server's copy, keeping
    /// the asset name already joined locally when the server omits it.
    pub async fn update_status_optimistic(
        &self,
        list: &mut OptimisticList<AssetTransaction>,
        id: &str,
        status: &str,
    ) -> ClientResult<()> {
        let Some(ticket) = list.update(id, |tx| tx.status = status.to_string()) else {
            return Err(crate::ClientError::NotFound(format!("transaction {id}")));
        };
        let mut confirmed = list.settle(ticket, self.update_status(id, status)).await?;
        if confirmed.asset_name.is_none() {
            confirmed.asset_name = list.get(id).and_then(|tx| tx.asset_name.clone());
        }
        list.replace(confirmed);
        Ok(())
    }
}
