use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use cookbook_api::application::http::server::http_server::{router, state};
use cookbook_api::args::{Args, LogArgs};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port)
        .parse()
        .context("invalid server host or port")?;

    let state = state(args.clone()).await?;
    let router = router(state)?;

    info!("listening on {addr}");
    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await
        .context("http server terminated")?;

    Ok(())
}
