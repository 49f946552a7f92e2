//! cubespin server - rotating cube projection over HTTP
//!
//! Usage: cubespin-server [--host ADDR] [--port PORT] [--servername NAME]
//! `CUBEHOST` overrides the hostname reported in responses.

use anyhow::Result;
use clap::Parser;
use cubespin_server::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    cubespin_server::run(config).await
}
