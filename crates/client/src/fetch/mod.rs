//! HTTP fetch pipeline against the static catalog origin.
//!
//! ### Origin
//! - Resolved once when the client is built (see [`url::resolve_origin`]).
//! - Request URLs are `{origin}{path}`.
//!
//! ### Requests
//! - One GET per call, no retries.
//! - `Cache-Control: max-age=<revalidate>` is sent as a freshness hint for
//!   intermediate caches (default 24h). It does not cache anything in-process.
//! - Transport failures, timeouts and non-success statuses come back as
//!   `Err`; deciding what to do about them is the caller's job.

pub mod memory;
pub mod url;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, header};
use std::time::{Duration, Instant};

pub use memory::MemorySource;
pub use self::url::{UrlError, resolve_origin};

use catalog_core::{AppConfig, Error};

/// A place static catalog files can be read from.
///
/// `path` always starts with `/` and is relative to the origin.
#[async_trait]
pub trait StaticSource: Send + Sync {
    /// Fetch the raw body stored at `path`.
    async fn fetch(&self, path: &str) -> Result<Bytes, Error>;
}

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Origin as configured (absolute URL or site-relative path)
    pub origin: String,

    /// Base URL a relative origin is joined onto
    pub site_url: String,

    /// User agent string (default: "catalog-data/0.1")
    pub user_agent: String,

    /// Request timeout (default: 20s)
    pub timeout: Duration,

    /// Freshness hint sent to intermediate caches (default: 24h)
    pub revalidate: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            origin: config.data_origin().to_string(),
            site_url: config.site_url.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout(),
            revalidate: config.revalidate(),
        }
    }
}

/// HTTP client bound to one resolved origin.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: Client,
    origin: String,
    cache_control: String,
}

impl FetchClient {
    /// Create a new fetch client with the given configuration.
    ///
    /// The origin is resolved here and fixed for the client's lifetime.
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let origin =
            resolve_origin(&config.origin, &config.site_url).map_err(|e| Error::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::HttpError(format!("failed to build HTTP client: {}", e)))?;

        let cache_control = format!("max-age={}", config.revalidate.as_secs());

        tracing::debug!("catalog origin resolved to {}", origin);

        Ok(Self { http, origin, cache_control })
    }

    /// The resolved origin every request is prefixed with.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Absolute URL for an origin-relative path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }
}

#[async_trait]
impl StaticSource for FetchClient {
    async fn fetch(&self, path: &str) -> Result<Bytes, Error> {
        let start = Instant::now();
        let url = reqwest::Url::parse(&self.url_for(path)).map_err(|e| Error::InvalidUrl(e.to_string()))?;

        let response = self
            .http
            .get(url.clone())
            .header(header::ACCEPT, "application/json")
            .header(header::CACHE_CONTROL, &self.cache_control)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::FetchTimeout(e.to_string())
                } else {
                    Error::HttpError(format!("network error: {}", e))
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            return Err(Error::HttpStatus(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::HttpError(format!("failed to read response: {}", e)))?;

        tracing::debug!("fetched {} in {}ms ({} bytes)", url, start.elapsed().as_millis(), bytes.len());

        Ok(bytes)
    }
}
