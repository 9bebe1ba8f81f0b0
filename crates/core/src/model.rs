//! Catalog records as published by the static origin.
//!
//! Only the fields the data layer reads are typed; anything else the origin
//! publishes is carried through untouched in `extra`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Page size assumed when the origin does not say otherwise.
pub const DEFAULT_PER_PAGE: u32 = 200;

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

/// Read a string field that the origin may publish as null, a number, or not at all.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// A `null` item list reads as empty.
fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<ItemSummary>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ItemSummary>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One catalog entry as it appears on a list page.
///
/// Missing or null `file_code`/`title` read as empty strings so one malformed
/// entry never rejects the page it sits on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    /// Item identifier; its first two characters are the shard prefix.
    #[serde(default, deserialize_with = "lenient_string")]
    pub file_code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItemSummary {
    pub fn new(file_code: impl Into<String>, title: impl Into<String>) -> Self {
        Self { file_code: file_code.into(), title: title.into(), extra: Map::new() }
    }
}

/// A single published list page (`list/{page}.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage {
    #[serde(default, deserialize_with = "lenient_items")]
    pub data: Vec<ItemSummary>,
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ListPage {
    /// Zero-valued page returned when `page` could not be fetched.
    pub fn empty(page: i64) -> Self {
        Self { data: Vec::new(), page, per_page: DEFAULT_PER_PAGE, total: 0, total_pages: 0, extra: Map::new() }
    }
}

/// Catalog-wide metadata (`meta.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub total: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Meta {
    /// Record returned when the meta file could not be fetched.
    pub fn unavailable() -> Self {
        Self { total: 0, per_page: DEFAULT_PER_PAGE, total_pages: None, extra: Map::new() }
    }

    /// Page count, treating an absent or zero value as unknown.
    pub fn known_total_pages(&self) -> Option<u32> {
        self.total_pages.filter(|&pages| pages > 0)
    }
}
