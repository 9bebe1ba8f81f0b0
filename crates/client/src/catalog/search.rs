//! Fallback full-text search over the first few list pages.
//!
//! Used when no precomputed index shard is queried. Titles are matched by
//! case-insensitive substring against the whitespace-separated query terms.
//!
//! ### Cost ceiling
//! - At most `min(total_pages, page_limit)` pages are fetched, in ascending
//!   order, one at a time.
//! - Scanning stops the moment `max_results` matches are collected, even in
//!   the middle of a page.
//!
//! ### Ranking
//! 1. Titles containing the whole lower-cased query come first.
//! 2. Then titles matching more distinct terms.
//! 3. Remaining ties keep scan order (the sort is stable).

use std::collections::HashSet;

use super::Catalog;
use catalog_core::ItemSummary;

/// Lower-cased query split into distinct search terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords {
    full: String,
    terms: Vec<String>,
}

impl Keywords {
    /// Parse a raw query. Repeated terms are kept once, in first-seen order.
    pub fn parse(query: &str) -> Self {
        let full = query.to_lowercase();
        let mut terms: Vec<String> = Vec::new();
        for term in full.split_whitespace() {
            if !terms.iter().any(|t| t == term) {
                terms.push(term.to_string());
            }
        }
        Self { full, terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Whether any term occurs in an already lower-cased title.
    pub fn matches(&self, title: &str) -> bool {
        self.terms.iter().any(|term| title.contains(term.as_str()))
    }

    /// Number of distinct terms occurring in an already lower-cased title.
    pub fn match_count(&self, title: &str) -> usize {
        self.terms.iter().filter(|term| title.contains(term.as_str())).count()
    }

    /// Whether the whole query occurs in an already lower-cased title.
    pub fn contains_full(&self, title: &str) -> bool {
        title.contains(self.full.as_str())
    }
}

/// Order results by relevance to `keywords`.
pub fn rank(results: &mut [ItemSummary], keywords: &Keywords) {
    results.sort_by_cached_key(|item| {
        let title = item.title.to_lowercase();
        (!keywords.contains_full(&title), std::cmp::Reverse(keywords.match_count(&title)))
    });
}

impl Catalog {
    /// Search titles using the configured result cap.
    pub async fn search(&self, query: &str) -> Vec<ItemSummary> {
        self.search_in_all_pages(query, self.options.max_results).await
    }

    /// Scan the leading list pages for titles matching `query`.
    ///
    /// Never fetches more than `min(total_pages, page_limit)` pages and never
    /// returns more than `max_results` items. An item seen on an earlier page
    /// is not added again. Pages that fail to load contribute nothing.
    pub async fn search_in_all_pages(&self, query: &str, max_results: usize) -> Vec<ItemSummary> {
        let meta = self.get_meta().await;
        let total_pages = meta.known_total_pages().unwrap_or(self.options.default_total_pages);
        let pages_to_scan = total_pages.min(self.options.page_limit);

        let keywords = Keywords::parse(query);
        let mut results: Vec<ItemSummary> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut scanned = 0u32;

        'pages: for page in 1..=pages_to_scan {
            if results.len() >= max_results {
                break;
            }

            let page_data = self.get_list_data(i64::from(page)).await;
            scanned += 1;

            for item in page_data.data {
                if seen.contains(&item.file_code) {
                    continue;
                }

                if keywords.matches(&item.title.to_lowercase()) {
                    seen.insert(item.file_code.clone());
                    results.push(item);
                    if results.len() >= max_results {
                        break 'pages;
                    }
                }
            }
        }

        rank(&mut results, &keywords);

        tracing::debug!(
            terms = ?keywords.terms(),
            "search {:?}: {} results from {} of {} pages",
            query,
            results.len(),
            scanned,
            pages_to_scan
        );

        results
    }
}
