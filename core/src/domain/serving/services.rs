use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::ports::RecipeRepository,
    serving::{
        ports::ServingService,
        value_objects::{ScaledRecipe, Servings},
    },
};

impl<R> ServingService for Service<R>
where
    R: RecipeRepository,
{
    #[instrument(skip(self), fields(servings = servings.map(Servings::get)))]
    async fn scale_recipe(
        &self,
        recipe_id: String,
        servings: Option<Servings>,
    ) -> Result<Option<ScaledRecipe>, CoreError> {
        let scaled = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .map(|recipe| {
                let servings =
                    servings.unwrap_or_else(|| Servings::clamped(i64::from(recipe.servings)));
                ScaledRecipe::from_recipe(&recipe, servings)
            });

        Ok(scaled)
    }
}
