use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        entities::Recipe,
        ports::{RecipeRepository, RecipeService},
        query,
        value_objects::{FilterOption, RecipeSearchParams, RecipeSearchResponse},
    },
};

impl<R> RecipeService for Service<R>
where
    R: RecipeRepository,
{
    #[instrument(
        skip(self, params),
        fields(query = ?params.query, filtered = !params.filters.is_empty(), page = params.page)
    )]
    async fn search_recipes(
        &self,
        params: RecipeSearchParams,
    ) -> Result<RecipeSearchResponse, CoreError> {
        let recipes = self.recipe_repository.list_recipes().await?;
        let response = query::search(&recipes, &params);

        tracing::debug!(
            total = response.total_count,
            returned = response.recipes.len(),
            "Searched recipes"
        );

        Ok(response)
    }

    #[instrument(skip(self))]
    async fn get_recipe(&self, recipe_id: String) -> Result<Option<Recipe>, CoreError> {
        let recipe = self.recipe_repository.get_by_id(recipe_id).await?;

        if recipe.is_none() {
            tracing::debug!("Recipe not found");
        }

        Ok(recipe)
    }

    async fn get_categories(&self) -> Result<Vec<FilterOption>, CoreError> {
        let recipes = self.recipe_repository.list_recipes().await?;
        Ok(query::category_options(&recipes))
    }

    async fn get_cuisines(&self) -> Result<Vec<FilterOption>, CoreError> {
        let recipes = self.recipe_repository.list_recipes().await?;
        Ok(query::cuisine_options(&recipes))
    }

    async fn get_difficulties(&self) -> Result<Vec<FilterOption>, CoreError> {
        let recipes = self.recipe_repository.list_recipes().await?;
        Ok(query::difficulty_options(&recipes))
    }

    async fn get_popular_tags(&self, limit: usize) -> Result<Vec<String>, CoreError> {
        let recipes = self.recipe_repository.list_recipes().await?;
        Ok(query::popular_tags(&recipes, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::ports::MockRecipeRepository;
    use crate::infrastructure::recipe::fixture::dummy_recipes;

    #[tokio::test]
    async fn test_search_runs_engine_over_repository() {
        let mut repository = MockRecipeRepository::new();
        repository
            .expect_list_recipes()
            .times(1)
            .returning(|| Box::pin(async { Ok(dummy_recipes()) }));

        let service = Service::new(repository);
        let response = service
            .search_recipes(RecipeSearchParams {
                query: Some("bowl".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let ids: Vec<_> = response.recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[tokio::test]
    async fn test_missing_recipe_is_none() {
        let mut repository = MockRecipeRepository::new();
        repository
            .expect_get_by_id()
            .withf(|id| id == "nonexistent")
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = Service::new(repository);
        let recipe = service.get_recipe("nonexistent".to_string()).await;

        assert_eq!(recipe, Ok(None));
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let mut repository = MockRecipeRepository::new();
        repository.expect_list_recipes().returning(|| {
            Box::pin(async { Err(CoreError::CatalogUnavailable("timeout".to_string())) })
        });

        let service = Service::new(repository);
        let result = service.get_popular_tags(10).await;

        assert_eq!(
            result,
            Err(CoreError::CatalogUnavailable("timeout".to_string()))
        );
    }
}
