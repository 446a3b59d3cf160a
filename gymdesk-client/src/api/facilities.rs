//! `/facilities`

use serde_json::Value;
use shared::models::{Facility, FacilityPayload};

use super::item_path;
use crate::{ClientResult, HttpClient};

pub const FACILITIES: &str = "/facilities";

pub struct FacilitiesApi<'a, H> {
    pub(crate) http: &'a H,
}

impl<H: HttpClient> FacilitiesApi<'_, H> {
    pub async fn list(&self) -> ClientResult<Vec<Facility>> {
        self.http.get_list(FACILITIES).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Facility> {
        self.http.get_item(&item_path(FACILITIES, id)).await
    }

    pub async fn create(&self, payload: &FacilityPayload) -> ClientResult<Facility> {
        self.http.post_item(FACILITIES, payload).await
    }

    pub async fn update(&self, id: &str, payload: &FacilityPayload) -> ClientResult<Facility> {
        self.http.put_item(&item_path(FACILITIES, id), payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete::<Value>(&item_path(FACILITIES, id)).await?;
        Ok(())
    }
}
