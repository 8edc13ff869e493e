use axum::extract::State;
use cookbook_core::domain::recipe::{
    ports::RecipeService,
    value_objects::{RecipeSearchParams, RecipeSearchResponse},
};

use crate::application::http::{
    query_extractor::QueryParamsExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "Search recipes",
    description = "Free-text search over title, description, tags and cuisine, combined with structured filters, sorting and pagination. Supports q, filter[category], filter[cuisine], filter[difficulty], filter[cook_time][lte], filter[tags][in], filter[rating][gte], sort (e.g. -rating, title), page and limit.",
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive text matched against title, description, tags or cuisine"),
        ("filter[category]" = Option<String>, Query, description = "Exact category"),
        ("filter[cuisine]" = Option<String>, Query, description = "Exact cuisine"),
        ("filter[difficulty]" = Option<String>, Query, description = "Easy, Medium or Hard"),
        ("filter[cook_time][lte]" = Option<u32>, Query, description = "Maximum cook time in minutes"),
        ("filter[tags][in]" = Option<String>, Query, description = "Comma-separated tags, any of which may match"),
        ("filter[rating][gte]" = Option<f64>, Query, description = "Minimum rating"),
        ("sort" = Option<String>, Query, description = "rating, cook_time, created_at or title; prefix with - for descending"),
        ("page" = Option<u32>, Query, description = "1-based page number"),
        ("limit" = Option<u32>, Query, description = "Page size, at most 100"),
    ),
    responses(
        (status = 200, body = RecipeSearchResponse),
        (status = 400, description = "Unparseable filter or sort value"),
        (status = 503, description = "Catalog unavailable"),
    )
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<RecipeSearchResponse>, ApiError> {
    let params = RecipeSearchParams::try_from(query_params).map_err(ApiError::from)?;

    let response = state.service.search_recipes(params).await.map_err(|e| {
        tracing::error!("Failed to search recipes: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(response))
}
