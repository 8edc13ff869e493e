pub mod get_recipe;
pub mod get_scaled_recipe;
pub mod search_recipes;
