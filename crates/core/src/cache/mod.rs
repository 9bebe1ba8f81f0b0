//! Process-lifetime memory cache for catalog metadata and list pages.
//!
//! The cache is created empty, shared via `Arc`, and never evicted: published
//! pages are immutable and the meta record is read once per process. Only
//! successful fetches are stored, so failures are retried on the next call.
//!
//! Two callers missing the same page concurrently may both fetch and both
//! insert; the last write wins, which is harmless for immutable pages.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::model::{ListPage, Meta};

/// Snapshot of what the cache currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub meta_cached: bool,
    pub pages_cached: usize,
}

/// In-memory cache for the meta record and list pages.
///
/// Uses tokio RwLocks so readers never block each other.
#[derive(Debug, Default)]
pub struct CatalogCache {
    meta: Arc<RwLock<Option<Meta>>>,
    pages: Arc<RwLock<HashMap<i64, ListPage>>>,
}

impl CatalogCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached meta record, if one has been stored.
    pub async fn meta(&self) -> Option<Meta> {
        self.meta.read().await.clone()
    }

    /// Store the meta record for the rest of the process lifetime.
    pub async fn put_meta(&self, meta: Meta) {
        *self.meta.write().await = Some(meta);
    }

    /// Cached list page, if present.
    pub async fn page(&self, page: i64) -> Option<ListPage> {
        self.pages.read().await.get(&page).cloned()
    }

    /// Store a list page under its page number.
    pub async fn put_page(&self, page: i64, data: ListPage) {
        self.pages.write().await.insert(page, data);
    }

    pub async fn stats(&self) -> CacheStats {
        let meta_cached = self.meta.read().await.is_some();
        let pages_cached = self.pages.read().await.len();
        CacheStats { meta_cached, pages_cached }
    }
}
