use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScaleRecipeParams {
    /// Requested serving count. Values below 1 are treated as 1.
    #[serde(default)]
    #[validate(range(max = 100, message = "servings must be at most 100"))]
    pub servings: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_servings_upper_bound() {
        let at_limit = ScaleRecipeParams {
            servings: Some(100),
        };
        assert!(at_limit.validate().is_ok());

        let above_limit = ScaleRecipeParams {
            servings: Some(101),
        };
        assert!(above_limit.validate().is_err());

        let below_one = ScaleRecipeParams { servings: Some(-4) };
        assert!(below_one.validate().is_ok());
    }
}
