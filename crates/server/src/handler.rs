//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the catalog accessors.
use crate::tools::cache::stats_impl;
use crate::tools::catalog_detail::{CatalogDetailParams, detail_impl};
use crate::tools::catalog_list::{CatalogListParams, list_impl};
use crate::tools::catalog_meta::meta_impl;
use crate::tools::catalog_search::{CatalogSearchIndexParams, CatalogSearchParams, search_impl, search_index_impl};

use catalog_client::Catalog;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for catalog-mcp.
#[derive(Clone)]
pub struct CatalogServer {
    catalog: Catalog,
    tool_router: ToolRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
#[tool_router]
impl CatalogServer {
    /// Create a new server handler over `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, tool_router: Self::tool_router() }
    }

    #[tool(description = "Fetch the full detail record for one catalog item by file code. Returns null if unavailable.")]
    async fn catalog_detail(&self, params: Parameters<CatalogDetailParams>) -> Result<CallToolResult, McpError> {
        detail_impl(&self.catalog, params.0).await
    }

    #[tool(description = "Fetch one paginated list page (1-indexed) of catalog item summaries.")]
    async fn catalog_list(&self, params: Parameters<CatalogListParams>) -> Result<CallToolResult, McpError> {
        list_impl(&self.catalog, params.0).await
    }

    #[tool(description = "Fetch the precomputed search index shard for a prefix.")]
    async fn catalog_search_index(
        &self, params: Parameters<CatalogSearchIndexParams>,
    ) -> Result<CallToolResult, McpError> {
        search_index_impl(&self.catalog, params.0).await
    }

    #[tool(description = "Fetch catalog metadata: total item count, page size and page count.")]
    async fn catalog_meta(&self) -> Result<CallToolResult, McpError> {
        meta_impl(&self.catalog).await
    }

    /// Keyword search over the leading list pages.
    ///
    /// Matches titles containing any query term and ranks full-query matches first.
    #[tool(description = "Search item titles by keyword across the first list pages. Results are ranked by relevance.")]
    async fn catalog_search(&self, params: Parameters<CatalogSearchParams>) -> Result<CallToolResult, McpError> {
        search_impl(&self.catalog, params.0).await
    }

    #[tool(description = "Report what the in-memory catalog cache currently holds.")]
    async fn catalog_cache_stats(&self) -> Result<CallToolResult, McpError> {
        stats_impl(&self.catalog).await
    }
}

impl ServerHandler for CatalogServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "catalog-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
