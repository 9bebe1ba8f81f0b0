//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (CATALOG_*)
//! 2. TOML config file (if CATALOG_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Origin used when no data URL is configured.
pub const DEFAULT_DATA_ORIGIN: &str = "/data";

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (CATALOG_*)
/// 2. TOML config file (if CATALOG_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base location of the static catalog JSON (e.g. a CDN bucket).
    ///
    /// Set via CATALOG_DATA_URL environment variable. Falls back to `/data`.
    #[serde(default)]
    pub data_url: Option<String>,

    /// Site base that relative origins are resolved against.
    ///
    /// Set via CATALOG_SITE_URL environment variable.
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via CATALOG_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via CATALOG_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Freshness hint sent with every request, in seconds.
    ///
    /// Set via CATALOG_REVALIDATE_SECS environment variable.
    #[serde(default = "default_revalidate_secs")]
    pub revalidate_secs: u64,

    /// Maximum number of list pages the fallback search scans.
    ///
    /// Set via CATALOG_SEARCH_PAGE_LIMIT environment variable.
    #[serde(default = "default_search_page_limit")]
    pub search_page_limit: u32,

    /// Page count assumed when the meta record has none.
    ///
    /// Set via CATALOG_SEARCH_DEFAULT_TOTAL_PAGES environment variable.
    #[serde(default = "default_search_total_pages")]
    pub search_default_total_pages: u32,

    /// Result cap applied when the caller does not pass one.
    ///
    /// Set via CATALOG_SEARCH_MAX_RESULTS environment variable.
    #[serde(default = "default_search_max_results")]
    pub search_max_results: usize,
}

fn default_site_url() -> String {
    "http://localhost:3000".into()
}

fn default_user_agent() -> String {
    "catalog-data/0.1".into()
}

fn default_timeout_ms() -> u64 {
    20_000
}

fn default_revalidate_secs() -> u64 {
    86_400 // 24h
}

fn default_search_page_limit() -> u32 {
    10
}

fn default_search_total_pages() -> u32 {
    137
}

fn default_search_max_results() -> usize {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_url: None,
            site_url: default_site_url(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            revalidate_secs: default_revalidate_secs(),
            search_page_limit: default_search_page_limit(),
            search_default_total_pages: default_search_total_pages(),
            search_max_results: default_search_max_results(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Freshness window as Duration.
    pub fn revalidate(&self) -> Duration {
        Duration::from_secs(self.revalidate_secs)
    }

    /// The origin static JSON is served from.
    ///
    /// A blank `data_url` counts as unset.
    pub fn data_origin(&self) -> &str {
        self.data_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_DATA_ORIGIN)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `CATALOG_`
    /// 2. TOML file from `CATALOG_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("CATALOG_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("CATALOG_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
