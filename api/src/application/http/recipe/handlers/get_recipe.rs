use axum::extract::{Path, State};
use cookbook_core::domain::recipe::{entities::Recipe, ports::RecipeService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Get recipe",
    description = "Retrieves a single recipe by its identifier.",
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = Recipe),
        (status = 404, description = "Recipe not found"),
    ),
)]
pub async fn get_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Recipe>, ApiError> {
    let recipe = state
        .service
        .get_recipe(recipe_id.clone())
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Recipe '{recipe_id}' not found")))?;

    Ok(Response::OK(recipe))
}
