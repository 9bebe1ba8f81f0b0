//! catalog_list tool implementation.

use catalog_client::Catalog;
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::json_result;

/// Input parameters for catalog_list tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogListParams {
    /// Page number, 1-indexed (default 1).
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

/// Implementation of the catalog_list tool.
pub async fn list_impl(catalog: &Catalog, params: CatalogListParams) -> Result<CallToolResult, McpError> {
    let page = catalog.get_list_data(params.page).await;
    json_result(&page)
}
