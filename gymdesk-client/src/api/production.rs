//! `/api/production-recipes` and `/api/production-batches`

use shared::models::{BatchPayload, ProductionBatch, Recipe, RecipePayload};

use super::item_path;
use crate::{ClientResult, HttpClient};

pub const RECIPES: &str = "/api/production-recipes";
pub const BATCHES: &str = "/api/production-batches";

pub struct ProductionApi<'a, H> {
    pub(crate) http: &'a H,
}

impl<H: HttpClient> ProductionApi<'_, H> {
    pub async fn recipes(&self) -> ClientResult<Vec<Recipe>> {
        self.http.get_list(RECIPES).await
    }

    pub async fn create_recipe(&self, payload: &RecipePayload) -> ClientResult<Recipe> {
        self.http.post_item(RECIPES, payload).await
    }

    pub async fn update_recipe(&self, id: &str, payload: &RecipePayload) -> ClientResult<Recipe> {
        self.http.put_item(&item_path(RECIPES, id), payload).await
    }

    pub async fn batches(&self) -> ClientResult<Vec<ProductionBatch>> {
        self.http.get_list(BATCHES).await
    }

    pub async fn create_batch(&self, payload: &BatchPayload) -> ClientResult<ProductionBatch> {
        self.http.post_item(BATCHES, payload).await
    }

    pub async fn update_batch(
        &self,
        id: &str,
        payload: &BatchPayload,
    ) -> ClientResult<ProductionBatch> {
        self.http.put_item(&item_path(BATCHES, id), payload).await
    }
}
