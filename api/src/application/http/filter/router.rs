use super::handlers::{
    get_categories::{__path_get_categories, get_categories},
    get_cuisines::{__path_get_cuisines, get_cuisines},
    get_difficulties::{__path_get_difficulties, get_difficulties},
    get_popular_tags::{__path_get_popular_tags, get_popular_tags},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_categories, get_cuisines, get_difficulties, get_popular_tags))]
pub struct FilterApiDoc;

pub fn filter_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/filters/categories", state.args.server.root_path),
            get(get_categories),
        )
        .route(
            &format!("{}/filters/cuisines", state.args.server.root_path),
            get(get_cuisines),
        )
        .route(
            &format!("{}/filters/difficulties", state.args.server.root_path),
            get(get_difficulties),
        )
        .route(
            &format!("{}/filters/tags", state.args.server.root_path),
            get(get_popular_tags),
        )
}
