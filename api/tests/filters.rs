mod common;

use common::ApiContext;
use serde_json::{Value, json};
use test_context::test_context;

#[test_context(ApiContext)]
#[tokio::test]
async fn test_categories_with_counts(ctx: &mut ApiContext) {
    let response = ctx.server.get("/filters/categories").await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "data": [
            { "label": "Main Course", "value": "Main Course", "count": 4 },
            { "label": "Dessert", "value": "Dessert", "count": 1 },
            { "label": "Salad", "value": "Salad", "count": 1 },
        ]
    }));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_cuisines_each_appear_once(ctx: &mut ApiContext) {
    let body: Value = ctx.server.get("/filters/cuisines").await.json();
    let data = body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(data.len(), 6);
    assert_eq!(data[0]["value"], "Mediterranean");
    assert!(data.iter().all(|option| option["count"] == 1));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_difficulties_cover_every_level(ctx: &mut ApiContext) {
    let body: Value = ctx.server.get("/filters/difficulties").await.json();
    let counts: Vec<(String, u64)> = body["data"]
        .as_array()
        .into_iter()
        .flatten()
        .map(|option| {
            (
                option["value"].as_str().unwrap_or_default().to_string(),
                option["count"].as_u64().unwrap_or_default(),
            )
        })
        .collect();

    assert_eq!(
        counts,
        vec![
            ("Easy".to_string(), 2),
            ("Medium".to_string(), 3),
            ("Hard".to_string(), 1),
        ]
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_popular_tags(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/filters/tags")
        .add_query_param("limit", "4")
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "data": ["Vegetarian", "High-Protein", "Spicy", "Healthy"]
    }));

    ctx.server
        .get("/filters/tags")
        .add_query_param("limit", "0")
        .await
        .assert_status_bad_request();
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_health(ctx: &mut ApiContext) {
    let response = ctx.server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}
