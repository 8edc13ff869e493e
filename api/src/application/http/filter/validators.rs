use cookbook_core::domain::recipe::value_objects::DEFAULT_POPULAR_TAGS;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

fn default_tag_limit() -> usize {
    DEFAULT_POPULAR_TAGS
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PopularTagsParams {
    #[serde(default = "default_tag_limit")]
    #[validate(range(min = 1, max = 50, message = "limit must be between 1 and 50"))]
    pub limit: usize,
}
