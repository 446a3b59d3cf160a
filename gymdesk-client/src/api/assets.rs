//! `/api/assets`

use serde_json::Value;
use shared::models::{Asset, AssetPayload};

use super::item_path;
use crate::{ClientResult, HttpClient};

pub const ASSETS: &str = "/api/assets";

pub struct AssetsApi<'a, H> {
    pub(crate) http: &'a H,
}

impl<H: HttpClient> AssetsApi<'_, H> {
    pub async fn list(&self) -> ClientResult<Vec<Asset>> {
        self.http.get_list(ASSETS).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Asset> {
        self.http.get_item(&item_path(ASSETS, id)).await
    }

    pub async fn create(&self, payload: &AssetPayload) -> ClientResult<Asset> {
        self.http.post_item(ASSETS, payload).await
    }

    pub async fn update(&self, id: &str, payload: &AssetPayload) -> ClientResult<Asset> {
        self.http.put_item(&item_path(ASSETS, id), payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete::<Value>(&item_path(ASSETS, id)).await?;
        Ok(())
    }
}
