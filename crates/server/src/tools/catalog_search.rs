//! catalog_search and catalog_search_index tool implementations.
//!
//! `catalog_search_index` returns a precomputed prefix shard as published.
//! `catalog_search` runs the bounded keyword scan over the list pages.

use catalog_client::Catalog;
use catalog_core::{Error, ItemSummary};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::json_result;

/// Input parameters for catalog_search_index tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogSearchIndexParams {
    /// Index shard prefix, used verbatim as a path segment.
    pub prefix: String,
}

/// Input parameters for catalog_search tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CatalogSearchParams {
    /// Search query; whitespace-separated terms.
    pub query: String,

    /// Maximum number of results (default from configuration, 100).
    #[serde(default)]
    pub max_results: Option<usize>,
}

/// Output structure for catalog_search tool.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSearchOutput {
    pub query: String,
    pub count: usize,
    pub results: Vec<ItemSummary>,
}

/// Implementation of the catalog_search_index tool.
pub async fn search_index_impl(
    catalog: &Catalog, params: CatalogSearchIndexParams,
) -> Result<CallToolResult, McpError> {
    let entries = catalog.get_search_index(&params.prefix).await;
    json_result(&entries)
}

/// Implementation of the catalog_search tool.
pub async fn search_impl(catalog: &Catalog, params: CatalogSearchParams) -> Result<CallToolResult, McpError> {
    let max_results = params.max_results.unwrap_or(catalog.options().max_results);
    if max_results == 0 {
        return Err(Error::InvalidInput("max_results must be at least 1".into()).into());
    }

    let results = catalog.search_in_all_pages(&params.query, max_results).await;

    json_result(&CatalogSearchOutput { query: params.query, count: results.len(), results })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{catalog_with, result_json};
    use catalog_client::MemorySource;
    use serde_json::json;
    use std::sync::Arc;

    fn matrix_source() -> MemorySource {
        MemorySource::new()
            .with_json("/meta.json", &json!({"total": 400, "per_page": 200, "total_pages": 2}))
            .with_json(
                "/list/1.json",
                &json!({"data": [
                    {"file_code": "a1", "title": "Matrix Theory"},
                    {"file_code": "a2", "title": "The Matrix Reloaded"}
                ], "page": 1}),
            )
            .with_json("/list/2.json", &json!({"data": [{"file_code": "b1", "title": "Heat"}], "page": 2}))
    }

    #[tokio::test]
    async fn test_search_ranked_output() {
        let catalog = catalog_with(Arc::new(matrix_source()));
        let params = CatalogSearchParams { query: "the matrix".into(), ..Default::default() };

        let result = search_impl(&catalog, params).await.unwrap();
        let output = result_json(&result);

        assert_eq!(output["count"], 2);
        assert_eq!(output["results"][0]["title"], "The Matrix Reloaded");
        assert_eq!(output["results"][1]["title"], "Matrix Theory");
    }

    #[tokio::test]
    async fn test_search_max_results() {
        let catalog = catalog_with(Arc::new(matrix_source()));
        let params = CatalogSearchParams { query: "matrix".into(), max_results: Some(1) };

        let result = search_impl(&catalog, params).await.unwrap();
        assert_eq!(result_json(&result)["count"], 1);
    }

    #[tokio::test]
    async fn test_search_zero_max_results_rejected() {
        let catalog = catalog_with(Arc::new(matrix_source()));
        let params = CatalogSearchParams { query: "matrix".into(), max_results: Some(0) };

        assert!(search_impl(&catalog, params).await.is_err());
    }

    #[tokio::test]
    async fn test_search_index_shard() {
        let shard = json!([{"file_code": "ma01", "title": "Matrix"}]);
        let catalog = catalog_with(Arc::new(MemorySource::new().with_json("/index/ma.json", &shard)));

        let result = search_index_impl(&catalog, CatalogSearchIndexParams { prefix: "ma".into() }).await.unwrap();
        assert_eq!(result_json(&result), shard);
    }

    #[tokio::test]
    async fn test_search_index_missing_is_empty() {
        let catalog = catalog_with(Arc::new(MemorySource::new()));

        let result = search_index_impl(&catalog, CatalogSearchIndexParams { prefix: "zz".into() }).await.unwrap();
        assert_eq!(result_json(&result), json!([]));
    }
}
