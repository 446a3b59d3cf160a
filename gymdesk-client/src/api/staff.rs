//! `/api/trainers` (staff records)

use serde_json::Value;
use shared::models::{Staff, StaffCreate, StaffUpdate};

use super::item_path;
use crate::{ClientResult, HttpClient};

pub const TRAINERS: &str = "/api/trainers";

pub struct StaffApi<'a, H> {
    pub(crate) http: &'a H,
}

impl<H: HttpClient> StaffApi<'_, H> {
    pub async fn list(&self) -> ClientResult<Vec<Staff>> {
        self.http.get_list(TRAINERS).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Staff> {
        self.http.get_item(&item_path(TRAINERS, id)).await
    }

    pub async fn create(&self, payload: &StaffCreate) -> ClientResult<Staff> {
        self.http.post_item(TRAINERS, payload).await
    }

    pub async fn update(&self, id: &str, payload: &StaffUpdate) -> ClientResult<Staff> {
        self.http.put_item(&item_path(TRAINERS, id), payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete::<Value>(&item_path(TRAINERS, id)).await?;
        Ok(())
    }
}
