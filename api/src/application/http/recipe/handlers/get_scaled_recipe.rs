use axum::extract::{Path, State};
use cookbook_core::domain::serving::{
    ports::ServingService,
    value_objects::{ScaledRecipe, Servings},
};

use crate::application::http::{
    recipe::validators::ScaleRecipeParams,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateQuery},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{recipe_id}/servings",
    tag = "recipe",
    summary = "Scale recipe",
    description = "Scales ingredient amounts and per-serving nutrition to the requested number of servings. Omitting servings uses the recipe's own serving count.",
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
        ScaleRecipeParams,
    ),
    responses(
        (status = 200, body = ScaledRecipe),
        (status = 400, description = "Servings above the allowed maximum"),
        (status = 404, description = "Recipe not found"),
    ),
)]
pub async fn get_scaled_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    ValidateQuery(params): ValidateQuery<ScaleRecipeParams>,
) -> Result<Response<ScaledRecipe>, ApiError> {
    let scaled = state
        .service
        .scale_recipe(recipe_id.clone(), params.servings.map(Servings::clamped))
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Recipe '{recipe_id}' not found")))?;

    Ok(Response::OK(scaled))
}
