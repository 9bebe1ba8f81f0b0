//! catalog_cache_stats tool implementation.
//!
//! Reports whether meta is cached and how many list pages are held.

use catalog_client::Catalog;
use rmcp::{ErrorData as McpError, model::CallToolResult};

use crate::tools::json_result;

/// Implementation of the catalog_cache_stats tool.
pub async fn stats_impl(catalog: &Catalog) -> Result<CallToolResult, McpError> {
    let stats = catalog.cache().stats().await;
    json_result(&stats)
}
