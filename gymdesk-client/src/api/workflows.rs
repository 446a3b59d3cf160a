//! `/api/followup-workflows`

use serde_json::Value;
use shared::models::Workflow;

use super::item_path;
use crate::{ClientResult, HttpClient};

pub const WORKFLOWS: &str = "/api/followup-workflows";

pub struct WorkflowsApi<'a, H> {
    pub(crate) http: &'a H,
}

impl<H: HttpClient> WorkflowsApi<'_, H> {
    pub async fn list(&self) -> ClientResult<Vec<Workflow>> {
        self.http.get_list(WORKFLOWS).await
    }

    pub async fn create(&self, workflow: &Workflow) -> ClientResult<Workflow> {
        self.http.post_item(WORKFLOWS, workflow).await
    }

    pub async fn update(&self, id: &str, workflow: &Workflow) -> ClientResult<Workflow> {
        self.http.put_item(&item_path(WORKFLOWS, id), workflow).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete::<Value>(&item_path(WORKFLOWS, id)).await?;
        Ok(())
    }
}
