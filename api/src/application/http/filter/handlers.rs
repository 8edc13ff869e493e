pub mod get_categories;
pub mod get_cuisines;
pub mod get_difficulties;
pub mod get_popular_tags;
