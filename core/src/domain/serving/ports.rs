use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    serving::value_objects::{ScaledRecipe, Servings},
};

#[cfg_attr(test, mockall::automock)]
pub trait ServingService: Send + Sync {
    /// `servings: None` keeps the recipe's own serving count. `Ok(None)` when
    /// no recipe has this identifier.
    fn scale_recipe(
        &self,
        recipe_id: String,
        servings: Option<Servings>,
    ) -> impl Future<Output = Result<Option<ScaledRecipe>, CoreError>> + Send;
}
