//! MCP tool implementations.
//!
//! Each tool maps its arguments onto one catalog accessor and renders the
//! result as pretty JSON text.

pub mod cache;
pub mod catalog_detail;
pub mod catalog_list;
pub mod catalog_meta;
pub mod catalog_search;

use catalog_core::Error;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

/// Render `value` as a successful tool result.
pub(crate) fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| Error::Parse(format!("failed to serialize: {e}")))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}
