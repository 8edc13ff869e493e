pub mod filter;
pub mod health;
pub mod query_extractor;
pub mod query_params;
pub mod recipe;
pub mod server;
