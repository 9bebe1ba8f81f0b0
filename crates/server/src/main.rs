//! catalog-mcp server entry point.
//!
//! Boots an MCP server on stdio transport exposing the catalog accessors.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use anyhow::Result;
use catalog_client::Catalog;
use catalog_core::AppConfig;
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    let catalog = Catalog::from_config(&config)?;

    tracing::info!(origin = config.data_origin(), "Starting catalog-mcp server on stdio transport");

    let handler = handler::CatalogServer::new(catalog);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
