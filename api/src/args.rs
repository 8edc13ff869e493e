use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use cookbook_core::domain::common::{CatalogConfig, CookbookConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "cookbook", about = "Recipe catalog HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct CatalogArgs {
    #[arg(
        long = "catalog-search-latency-ms",
        env = "CATALOG_SEARCH_LATENCY_MS",
        default_value_t = 500
    )]
    pub search_latency_ms: u64,

    #[arg(
        long = "catalog-lookup-latency-ms",
        env = "CATALOG_LOOKUP_LATENCY_MS",
        default_value_t = 300
    )]
    pub lookup_latency_ms: u64,
}

impl From<Args> for CookbookConfig {
    fn from(args: Args) -> Self {
        Self {
            catalog: CatalogConfig {
                search_latency: Duration::from_millis(args.catalog.search_latency_ms),
                lookup_latency: Duration::from_millis(args.catalog.lookup_latency_ms),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_catalog_latency() {
        let args = Args::try_parse_from(["cookbook"]).unwrap();
        assert_eq!(args.server.port, 3333);
        assert_eq!(args.server.root_path, "");

        let config = CookbookConfig::from(args);
        assert_eq!(config.catalog.search_latency, Duration::from_millis(500));
        assert_eq!(config.catalog.lookup_latency, Duration::from_millis(300));
    }

    #[test]
    fn test_allowed_origins_split_on_commas() {
        let args = Args::try_parse_from([
            "cookbook",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
