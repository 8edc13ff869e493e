use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{FilterOption, RecipeSearchParams, RecipeSearchResponse},
    },
};

/// Read-only source of recipe records. The fixture implements it today; a
/// networked catalog can replace it without touching query semantics.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn list_recipes(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: String,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn search_recipes(
        &self,
        params: RecipeSearchParams,
    ) -> impl Future<Output = Result<RecipeSearchResponse, CoreError>> + Send;

    /// `Ok(None)` is the ordinary not-found outcome.
    fn get_recipe(
        &self,
        recipe_id: String,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn get_categories(&self) -> impl Future<Output = Result<Vec<FilterOption>, CoreError>> + Send;

    fn get_cuisines(&self) -> impl Future<Output = Result<Vec<FilterOption>, CoreError>> + Send;

    fn get_difficulties(
        &self,
    ) -> impl Future<Output = Result<Vec<FilterOption>, CoreError>> + Send;

    fn get_popular_tags(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}
