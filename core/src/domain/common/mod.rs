use std::time::Duration;

pub mod entities;
pub mod services;

#[derive(Clone, Debug, Default)]
pub struct CookbookConfig {
    pub catalog: CatalogConfig,
}

/// Simulated backend latency for the fixture catalog.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub search_latency: Duration,
    pub lookup_latency: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_latency: Duration::from_millis(500),
            lookup_latency: Duration::from_millis(300),
        }
    }
}

impl CatalogConfig {
    pub fn without_latency() -> Self {
        Self {
            search_latency: Duration::ZERO,
            lookup_latency: Duration::ZERO,
        }
    }
}
