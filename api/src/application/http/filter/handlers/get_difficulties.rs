use axum::extract::State;
use cookbook_core::domain::recipe::{ports::RecipeService, value_objects::FilterOption};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDifficultiesResponse {
    pub data: Vec<FilterOption>,
}

#[utoipa::path(
    get,
    path = "/difficulties",
    tag = "filter",
    summary = "List difficulty levels",
    description = "All three difficulty levels with recipe counts, including levels with no recipes.",
    responses(
        (status = 200, body = GetDifficultiesResponse)
    )
)]
pub async fn get_difficulties(
    State(state): State<AppState>,
) -> Result<Response<GetDifficultiesResponse>, ApiError> {
    let data = state.service.get_difficulties().await.map_err(|e| {
        tracing::error!("Failed to list difficulties: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(GetDifficultiesResponse { data }))
}
