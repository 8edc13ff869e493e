use tracing::info;

use crate::domain::common::{CookbookConfig, entities::app_errors::CoreError, services::Service};
use crate::infrastructure::recipe::InMemoryRecipeRepository;

pub mod catalog_session;

pub use catalog_session::CatalogSession;

pub type CookbookService = Service<InMemoryRecipeRepository>;

pub async fn create_service(config: CookbookConfig) -> Result<CookbookService, CoreError> {
    let recipe_repository = InMemoryRecipeRepository::with_fixture(config.catalog.clone());

    if recipe_repository.is_empty() {
        return Err(CoreError::CatalogUnavailable(
            "fixture catalog is empty".to_string(),
        ));
    }

    info!(
        recipes = recipe_repository.len(),
        search_latency_ms = config.catalog.search_latency.as_millis() as u64,
        lookup_latency_ms = config.catalog.lookup_latency.as_millis() as u64,
        "Recipe catalog loaded"
    );

    Ok(Service::new(recipe_repository))
}
