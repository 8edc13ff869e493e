use crate::application::http::{filter::router::FilterApiDoc, recipe::router::RecipeApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cookbook API"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/filters", api = FilterApiDoc),
    )
)]
pub struct ApiDoc;
