use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::domain::{
    common::{CatalogConfig, entities::app_errors::CoreError},
    recipe::{entities::Recipe, ports::RecipeRepository},
};
use crate::infrastructure::recipe::fixture;

/// Fixture-backed catalog that answers after an artificial delay, standing in
/// for a remote recipe API.
#[derive(Debug, Clone)]
pub struct InMemoryRecipeRepository {
    recipes: Arc<[Recipe]>,
    config: CatalogConfig,
}

impl InMemoryRecipeRepository {
    pub fn new(recipes: Vec<Recipe>, config: CatalogConfig) -> Self {
        Self {
            recipes: Arc::from(recipes),
            config,
        }
    }

    pub fn with_fixture(config: CatalogConfig) -> Self {
        Self::new(fixture::dummy_recipes(), config)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    async fn simulate_latency(latency: Duration) {
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, CoreError> {
        Self::simulate_latency(self.config.search_latency).await;

        debug!(count = self.recipes.len(), "Listing recipes from fixture");
        Ok(self.recipes.to_vec())
    }

    async fn get_by_id(&self, recipe_id: String) -> Result<Option<Recipe>, CoreError> {
        Self::simulate_latency(self.config.lookup_latency).await;

        let recipe = self
            .recipes
            .iter()
            .find(|recipe| recipe.id == recipe_id)
            .cloned();

        debug!(recipe_id = %recipe_id, found = recipe.is_some(), "Looked up recipe");
        Ok(recipe)
    }
}
