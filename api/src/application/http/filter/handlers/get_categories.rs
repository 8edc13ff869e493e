use axum::extract::State;
use cookbook_core::domain::recipe::{ports::RecipeService, value_objects::FilterOption};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCategoriesResponse {
    pub data: Vec<FilterOption>,
}

#[utoipa::path(
    get,
    path = "/categories",
    tag = "filter",
    summary = "List categories",
    description = "Distinct recipe categories with the number of recipes in each, in catalog order.",
    responses(
        (status = 200, body = GetCategoriesResponse)
    )
)]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Response<GetCategoriesResponse>, ApiError> {
    let data = state.service.get_categories().await.map_err(|e| {
        tracing::error!("Failed to list categories: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(GetCategoriesResponse { data }))
}
