pub mod fixture;
pub mod repositories;

pub use repositories::InMemoryRecipeRepository;
