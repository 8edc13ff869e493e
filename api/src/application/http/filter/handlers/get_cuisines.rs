use axum::extract::State;
use cookbook_core::domain::recipe::{ports::RecipeService, value_objects::FilterOption};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCuisinesResponse {
    pub data: Vec<FilterOption>,
}

#[utoipa::path(
    get,
    path = "/cuisines",
    tag = "filter",
    summary = "List cuisines",
    description = "Distinct cuisines with the number of recipes in each, in catalog order.",
    responses(
        (status = 200, body = GetCuisinesResponse)
    )
)]
pub async fn get_cuisines(
    State(state): State<AppState>,
) -> Result<Response<GetCuisinesResponse>, ApiError> {
    let data = state.service.get_cuisines().await.map_err(|e| {
        tracing::error!("Failed to list cuisines: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(GetCuisinesResponse { data }))
}
