//! catalog_detail tool implementation.
//!
//! Fetches one item's detail record from its shard directory.

use catalog_client::Catalog;
use catalog_core::Error;
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::json_result;

/// Input parameters for catalog_detail tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogDetailParams {
    /// Item identifier (file code).
    pub file_code: String,
}

/// Implementation of the catalog_detail tool.
pub async fn detail_impl(catalog: &Catalog, params: CatalogDetailParams) -> Result<CallToolResult, McpError> {
    if params.file_code.is_empty() {
        return Err(Error::InvalidInput("file_code cannot be empty".into()).into());
    }

    let detail = catalog.get_file_detail(&params.file_code).await;
    json_result(&detail)
}
