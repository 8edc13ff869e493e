use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use cookbook_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use test_context::AsyncTestContext;

pub struct ApiContext {
    pub server: TestServer,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let args = Args::try_parse_from([
            "cookbook",
            "--catalog-search-latency-ms",
            "0",
            "--catalog-lookup-latency-ms",
            "0",
            "--server-root-path",
            "",
        ])
        .expect("test args should parse");

        let state = state(Arc::new(args)).await.expect("state should build");
        let app = router(state).expect("router should build");

        Self {
            server: TestServer::new(app).expect("test server should start"),
        }
    }
}
