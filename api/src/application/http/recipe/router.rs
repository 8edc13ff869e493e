use super::handlers::{
    get_recipe::{__path_get_recipe, get_recipe},
    get_scaled_recipe::{__path_get_scaled_recipe, get_scaled_recipe},
    search_recipes::{__path_search_recipes, search_recipes},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_recipes, get_recipe, get_scaled_recipe))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes", state.args.server.root_path),
            get(search_recipes),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", state.args.server.root_path),
            get(get_recipe),
        )
        .route(
            &format!(
                "{}/recipes/{{recipe_id}}/servings",
                state.args.server.root_path
            ),
            get(get_scaled_recipe),
        )
}
