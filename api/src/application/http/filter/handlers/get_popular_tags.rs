use axum::extract::State;
use cookbook_core::domain::recipe::ports::RecipeService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    filter::validators::PopularTagsParams,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateQuery},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPopularTagsResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/tags",
    tag = "filter",
    summary = "List popular tags",
    description = "Tags ordered by how many recipes carry them. Ties keep the order in which tags first appear in the catalog.",
    params(PopularTagsParams),
    responses(
        (status = 200, body = GetPopularTagsResponse),
        (status = 400, description = "Limit outside 1..=50"),
    )
)]
pub async fn get_popular_tags(
    State(state): State<AppState>,
    ValidateQuery(params): ValidateQuery<PopularTagsParams>,
) -> Result<Response<GetPopularTagsResponse>, ApiError> {
    let data = state
        .service
        .get_popular_tags(params.limit)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list popular tags: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(GetPopularTagsResponse { data }))
}
