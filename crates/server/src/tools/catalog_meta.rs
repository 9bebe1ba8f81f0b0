//! catalog_meta tool implementation.

use catalog_client::Catalog;
use rmcp::{ErrorData as McpError, model::CallToolResult};

use super::json_result;

/// Implementation of the catalog_meta tool.
pub async fn meta_impl(catalog: &Catalog) -> Result<CallToolResult, McpError> {
    let meta = catalog.get_meta().await;
    json_result(&meta)
}
