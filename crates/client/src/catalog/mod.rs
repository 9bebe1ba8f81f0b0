//! Catalog accessors over a static JSON origin.
//!
//! Every public accessor absorbs failures: transport errors, non-success
//! statuses and undecodable bodies are logged and replaced by the documented
//! default (`None`, an empty page, empty index, or zeroed meta). A failed fetch
//! is indistinguishable from a legitimately empty result to the caller.
//!
//! Meta and list pages are cached in the shared [`CatalogCache`] after a
//! successful fetch only. Detail records and index shards are never cached.

pub mod search;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::fetch::{FetchClient, FetchConfig, StaticSource, url};
use catalog_core::{AppConfig, CatalogCache, Error, ListPage, Meta};

pub use search::{Keywords, rank};

/// Bounds for the fallback full-text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of list pages scanned (default: 10)
    pub page_limit: u32,
    /// Page count assumed when meta has none (default: 137)
    pub default_total_pages: u32,
    /// Result cap used by [`Catalog::search`] (default: 100)
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for SearchOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            page_limit: config.search_page_limit,
            default_total_pages: config.search_default_total_pages,
            max_results: config.search_max_results,
        }
    }
}

/// Read-only access to the catalog.
#[derive(Clone)]
pub struct Catalog {
    source: Arc<dyn StaticSource>,
    cache: Arc<CatalogCache>,
    options: SearchOptions,
}

impl Catalog {
    pub fn new(source: Arc<dyn StaticSource>, cache: Arc<CatalogCache>, options: SearchOptions) -> Self {
        Self { source, cache, options }
    }

    /// Build an HTTP-backed catalog with a fresh cache.
    pub fn from_config(config: &AppConfig) -> Result<Self, Error> {
        let client = FetchClient::new(FetchConfig::from(config))?;
        Ok(Self::new(Arc::new(client), Arc::new(CatalogCache::new()), SearchOptions::from(config)))
    }

    pub fn cache(&self) -> &CatalogCache {
        &self.cache
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Fetch `path` and decode its body.
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let body = self.source.fetch(path).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Detail record for one item, fetched on every call.
    ///
    /// Returns `None` if the record is missing or cannot be read.
    pub async fn get_file_detail(&self, file_code: &str) -> Option<Value> {
        match self.fetch_json::<Value>(&url::detail_path(file_code)).await {
            Ok(detail) => Some(detail).filter(|d| !d.is_null()),
            Err(e) => {
                log_failure(&format!("detail for {file_code}"), &e);
                None
            }
        }
    }

    /// Catalog metadata.
    ///
    /// The first successful fetch is kept for the rest of the process
    /// lifetime; later calls never touch the network. A failed fetch yields
    /// [`Meta::unavailable`] and is retried on the next call.
    pub async fn get_meta(&self) -> Meta {
        if let Some(meta) = self.cache.meta().await {
            tracing::debug!("meta cache hit");
            return meta;
        }

        match self.fetch_json::<Meta>(url::META_PATH).await {
            Ok(meta) => {
                self.cache.put_meta(meta.clone()).await;
                meta
            }
            Err(e) => {
                log_failure("meta", &e);
                Meta::unavailable()
            }
        }
    }

    /// One list page (1-indexed; any integer is forwarded as-is).
    ///
    /// Successful fetches are cached under `page` forever. Failures yield
    /// [`ListPage::empty`] without caching.
    pub async fn get_list_data(&self, page: i64) -> ListPage {
        if let Some(cached) = self.cache.page(page).await {
            tracing::debug!("list page cache hit: {}", page);
            return cached;
        }

        match self.fetch_json::<ListPage>(&url::list_path(page)).await {
            Ok(data) => {
                self.cache.put_page(page, data.clone()).await;
                data
            }
            Err(e) => {
                log_failure(&format!("list page {page}"), &e);
                ListPage::empty(page)
            }
        }
    }

    /// Precomputed search index shard for `prefix`, fetched on every call.
    pub async fn get_search_index(&self, prefix: &str) -> Vec<Value> {
        match self.fetch_json::<Vec<Value>>(&url::index_path(prefix)).await {
            Ok(entries) => entries,
            Err(e) => {
                log_failure(&format!("search index for {prefix}"), &e);
                Vec::new()
            }
        }
    }
}

fn log_failure(resource: &str, err: &Error) {
    match err.status() {
        Some(status) => tracing::error!(resource, status, "failed to fetch {}: {}", resource, status),
        None => tracing::error!(resource, error = %err, "failed to fetch {}", resource),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MemorySource;
    use serde_json::json;

    fn catalog_with(source: Arc<MemorySource>) -> Catalog {
        Catalog::new(source, Arc::new(CatalogCache::new()), SearchOptions::default())
    }

    fn page_json(page: i64, titles: &[(&str, &str)]) -> Value {
        let data: Vec<Value> = titles
            .iter()
            .map(|(code, title)| json!({"file_code": code, "title": title}))
            .collect();
        json!({"data": data, "page": page, "per_page": 200, "total": 400, "total_pages": 2})
    }

    #[tokio::test]
    async fn test_detail_uses_shard_path() {
        let source = Arc::new(
            MemorySource::new().with_json("/detail/ab/ab12cd.json", &json!({"file_code": "ab12cd", "size": 10})),
        );
        let catalog = catalog_with(source.clone());

        let detail = catalog.get_file_detail("ab12cd").await.unwrap();
        assert_eq!(detail["size"], 10);
        assert_eq!(source.requests("/detail/ab/ab12cd.json").await, 1);
    }

    #[tokio::test]
    async fn test_detail_short_code_degenerate_prefix() {
        let source = Arc::new(MemorySource::new().with_json("/detail/x/x.json", &json!({"ok": true})));
        let catalog = catalog_with(source.clone());

        assert!(catalog.get_file_detail("x").await.is_some());
    }

    #[tokio::test]
    async fn test_detail_is_never_cached() {
        let source = Arc::new(MemorySource::new().with_json("/detail/ab/ab12cd.json", &json!({})));
        let catalog = catalog_with(source.clone());

        catalog.get_file_detail("ab12cd").await;
        catalog.get_file_detail("ab12cd").await;

        assert_eq!(source.requests("/detail/ab/ab12cd.json").await, 2);
    }

    #[tokio::test]
    async fn test_detail_failures_yield_none() {
        let source = Arc::new(
            MemorySource::new()
                .with_status("/detail/ab/ab500.json", 500)
                .with_body("/detail/cd/cdbad.json", "<html>not json</html>"),
        );
        let catalog = catalog_with(source);

        assert!(catalog.get_file_detail("ab500").await.is_none());
        assert!(catalog.get_file_detail("cdbad").await.is_none());
        assert!(catalog.get_file_detail("zzmissing").await.is_none());
    }

    #[tokio::test]
    async fn test_meta_fetched_once() {
        let source = Arc::new(
            MemorySource::new().with_json("/meta.json", &json!({"total": 27400, "per_page": 200, "total_pages": 137})),
        );
        let catalog = catalog_with(source.clone());

        let first = catalog.get_meta().await;
        let second = catalog.get_meta().await;
        let third = catalog.get_meta().await;

        assert_eq!(first.total_pages, Some(137));
        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(source.requests("/meta.json").await, 1);
    }

    #[tokio::test]
    async fn test_meta_stays_cached_when_origin_changes() {
        let source = Arc::new(MemorySource::new().with_json("/meta.json", &json!({"total": 1, "per_page": 200})));
        let catalog = catalog_with(source.clone());

        catalog.get_meta().await;
        source.set_json("/meta.json", &json!({"total": 2, "per_page": 200})).await;

        assert_eq!(catalog.get_meta().await.total, 1);
        assert_eq!(source.requests("/meta.json").await, 1);
    }

    #[tokio::test]
    async fn test_meta_failure_not_cached() {
        let source = Arc::new(MemorySource::new().with_status("/meta.json", 500));
        let catalog = catalog_with(source.clone());

        let meta = catalog.get_meta().await;
        assert_eq!(meta, Meta::unavailable());
        assert!(catalog.cache().meta().await.is_none());

        catalog.get_meta().await;
        assert_eq!(source.requests("/meta.json").await, 2);

        source.set_json("/meta.json", &json!({"total": 5, "per_page": 200})).await;
        assert_eq!(catalog.get_meta().await.total, 5);
        assert_eq!(source.requests("/meta.json").await, 3);
    }

    #[tokio::test]
    async fn test_list_page_cached_after_success() {
        let source = Arc::new(MemorySource::new().with_json("/list/1.json", &page_json(1, &[("ab1", "One")])));
        let catalog = catalog_with(source.clone());

        let first = catalog.get_list_data(1).await;
        let second = catalog.get_list_data(1).await;

        assert_eq!(first, second);
        assert_eq!(first.data.len(), 1);
        assert_eq!(source.requests("/list/1.json").await, 1);
        assert_eq!(catalog.cache().stats().await.pages_cached, 1);
    }

    #[tokio::test]
    async fn test_list_page_with_malformed_item_is_cached() {
        let page = json!({
            "data": [{"file_code": "ab1", "title": "Ok"}, {"file_code": "ab2", "title": null}],
            "page": 1,
            "generated": "x"
        });
        let source = Arc::new(MemorySource::new().with_json("/list/1.json", &page));
        let catalog = catalog_with(source.clone());

        let first = catalog.get_list_data(1).await;
        let second = catalog.get_list_data(1).await;

        assert_eq!(first.data.len(), 2);
        assert_eq!(first.extra.get("generated"), Some(&json!("x")));
        assert_eq!(first, second);
        assert_eq!(source.requests("/list/1.json").await, 1);
    }

    #[tokio::test]
    async fn test_list_page_failure_not_cached() {
        let source = Arc::new(MemorySource::new().with_status("/list/2.json", 503));
        let catalog = catalog_with(source.clone());

        let page = catalog.get_list_data(2).await;
        assert_eq!(page, ListPage::empty(2));

        catalog.get_list_data(2).await;
        assert_eq!(source.requests("/list/2.json").await, 2);
        assert_eq!(catalog.cache().stats().await.pages_cached, 0);
    }

    #[tokio::test]
    async fn test_list_page_accepts_any_integer() {
        let source = Arc::new(MemorySource::new());
        let catalog = catalog_with(source.clone());

        assert_eq!(catalog.get_list_data(0).await, ListPage::empty(0));
        assert_eq!(catalog.get_list_data(-3).await, ListPage::empty(-3));
        assert_eq!(source.requests("/list/-3.json").await, 1);
    }

    #[tokio::test]
    async fn test_search_index_never_cached() {
        let source = Arc::new(MemorySource::new().with_json("/index/ma.json", &json!([{"file_code": "ma01"}])));
        let catalog = catalog_with(source.clone());

        assert_eq!(catalog.get_search_index("ma").await.len(), 1);
        assert_eq!(catalog.get_search_index("ma").await.len(), 1);
        assert_eq!(source.requests("/index/ma.json").await, 2);
    }

    #[tokio::test]
    async fn test_search_index_failure_is_empty() {
        let source = Arc::new(MemorySource::new().with_json("/index/ob.json", &json!({"not": "a list"})));
        let catalog = catalog_with(source);

        assert!(catalog.get_search_index("zz").await.is_empty());
        assert!(catalog.get_search_index("ob").await.is_empty());
    }

    #[tokio::test]
    async fn test_caches_are_per_instance() {
        let source = Arc::new(MemorySource::new().with_json("/meta.json", &json!({"total": 1, "per_page": 200})));

        catalog_with(source.clone()).get_meta().await;
        catalog_with(source.clone()).get_meta().await;

        assert_eq!(source.requests("/meta.json").await, 2);
    }
}
