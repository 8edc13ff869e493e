mod common;

use common::ApiContext;
use cookbook_api::application::http::server::api_entities::api_error::ApiErrorResponse;
use cookbook_core::domain::{
    recipe::{entities::Recipe, value_objects::RecipeSearchResponse},
    serving::value_objects::ScaledRecipe,
};
use test_context::test_context;

fn ids(response: &RecipeSearchResponse) -> Vec<&str> {
    response.recipes.iter().map(|r| r.id.as_str()).collect()
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_default_listing_is_rating_desc(ctx: &mut ApiContext) {
    let response = ctx.server.get("/recipes").await;
    response.assert_status_ok();

    let body: RecipeSearchResponse = response.json();
    assert_eq!(ids(&body), vec!["2", "6", "1", "3", "4", "5"]);
    assert_eq!(body.total_count, 6);
    assert_eq!(body.current_page, 1);
    assert_eq!(body.total_pages, 1);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_spicy_medium_search(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/recipes")
        .add_query_param("q", "spicy")
        .add_query_param("filter[difficulty]", "Medium")
        .add_query_param("sort", "-rating")
        .await;
    response.assert_status_ok();

    let body: RecipeSearchResponse = response.json();
    assert_eq!(ids(&body), vec!["2", "4"]);
    assert!(!body.has_next_page);
    assert!(!body.has_prev_page);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_tags_and_cook_time_filters(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/recipes")
        .add_query_param("filter[tags][in]", "Chocolate,Beef")
        .add_query_param("sort", "title")
        .await;
    let body: RecipeSearchResponse = response.json();
    assert_eq!(ids(&body), vec!["6", "3"]);

    let response = ctx
        .server
        .get("/recipes")
        .add_query_param("filter[cook_time][lte]", "20")
        .add_query_param("filter[category]", "Salad")
        .await;
    let body: RecipeSearchResponse = response.json();
    assert_eq!(ids(&body), vec!["5"]);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_cuisine_filter_is_case_sensitive(ctx: &mut ApiContext) {
    let body: RecipeSearchResponse = ctx
        .server
        .get("/recipes")
        .add_query_param("filter[cuisine]", "Thai")
        .await
        .json();
    assert_eq!(ids(&body), vec!["4"]);

    let response = ctx
        .server
        .get("/recipes")
        .add_query_param("filter[cuisine]", "thai")
        .await;
    response.assert_status_ok();

    let body: RecipeSearchResponse = response.json();
    assert!(body.recipes.is_empty());
    assert_eq!(body.total_count, 0);
    assert_eq!(body.total_pages, 0);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_zero_limit_uses_default_page_size(ctx: &mut ApiContext) {
    let body: RecipeSearchResponse = ctx
        .server
        .get("/recipes")
        .add_query_param("limit", "0")
        .await
        .json();
    assert_eq!(body.recipes.len(), 6);
    assert_eq!(body.total_pages, 1);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_out_of_range_page_is_empty(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/recipes")
        .add_query_param("page", "9")
        .add_query_param("limit", "4")
        .await;
    response.assert_status_ok();

    let body: RecipeSearchResponse = response.json();
    assert!(body.recipes.is_empty());
    assert_eq!(body.total_count, 6);
    assert_eq!(body.total_pages, 2);
    assert_eq!(body.current_page, 9);
    assert!(body.has_prev_page);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_invalid_difficulty_is_bad_request(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/recipes")
        .add_query_param("filter[difficulty]", "Impossible")
        .await;
    response.assert_status_bad_request();

    let error: ApiErrorResponse = response.json();
    assert_eq!(error.status, 400);
    assert_eq!(error.code, "E_BAD_REQUEST");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_unknown_sort_key_is_bad_request(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/recipes")
        .add_query_param("sort", "-popularity")
        .await;
    response.assert_status_bad_request();
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_get_recipe_by_id(ctx: &mut ApiContext) {
    let response = ctx.server.get("/recipes/4").await;
    response.assert_status_ok();

    let recipe: Recipe = response.json();
    assert_eq!(recipe.title, "Thai Green Curry");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_unknown_recipe_is_not_found(ctx: &mut ApiContext) {
    let response = ctx.server.get("/recipes/nonexistent").await;
    response.assert_status_not_found();

    let error: ApiErrorResponse = response.json();
    assert_eq!(error.status, 404);
    assert_eq!(error.code, "E_NOT_FOUND");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_scale_recipe_servings(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/recipes/2/servings")
        .add_query_param("servings", "4")
        .await;
    response.assert_status_ok();

    let scaled: ScaledRecipe = response.json();
    assert_eq!(scaled.base_servings, 2);
    assert_eq!(scaled.servings, 4);
    assert_eq!(scaled.ingredients[0].display, "4 cups");
    assert_eq!(scaled.nutrition.calories, 145);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_scale_recipe_defaults_and_clamps(ctx: &mut ApiContext) {
    let scaled: ScaledRecipe = ctx.server.get("/recipes/2/servings").await.json();
    assert_eq!(scaled.servings, 2);

    let scaled: ScaledRecipe = ctx
        .server
        .get("/recipes/2/servings")
        .add_query_param("servings", "0")
        .await
        .json();
    assert_eq!(scaled.servings, 1);

    ctx.server
        .get("/recipes/2/servings")
        .add_query_param("servings", "101")
        .await
        .assert_status_bad_request();

    ctx.server
        .get("/recipes/nonexistent/servings")
        .await
        .assert_status_not_found();
}
