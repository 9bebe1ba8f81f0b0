//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `user_agent` is empty
    /// - `revalidate_secs` is 0
    /// - any search bound is 0
    /// - `site_url` is not an absolute http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if self.revalidate_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "revalidate_secs".into(),
                reason: "must be greater than 0".into(),
            });
        }

        if self.search_page_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "search_page_limit".into(),
                reason: "must be greater than 0".into(),
            });
        }
        if self.search_default_total_pages == 0 {
            return Err(ConfigError::Invalid {
                field: "search_default_total_pages".into(),
                reason: "must be greater than 0".into(),
            });
        }
        if self.search_max_results == 0 {
            return Err(ConfigError::Invalid {
                field: "search_max_results".into(),
                reason: "must be greater than 0".into(),
            });
        }

        match url::Url::parse(&self.site_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::Invalid {
                    field: "site_url".into(),
                    reason: format!("unsupported scheme: {}", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::Invalid { field: "site_url".into(), reason: e.to_string() });
            }
        }

        if self.data_url.as_deref().is_some_and(|url| url.trim().is_empty()) {
            tracing::warn!("data_url is set but blank; falling back to {}", self.data_origin());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_timeout_too_small() {
        let config = AppConfig { timeout_ms: 50, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "timeout_ms"));
    }

    #[test]
    fn test_validate_timeout_exceeds_limit() {
        let config = AppConfig { timeout_ms: 301_000, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "timeout_ms"));
    }

    #[test]
    fn test_validate_empty_user_agent() {
        let config = AppConfig { user_agent: String::new(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "user_agent"));
    }

    #[test]
    fn test_validate_zero_revalidate() {
        let config = AppConfig { revalidate_secs: 0, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "revalidate_secs"));
    }

    #[test]
    fn test_validate_zero_search_bounds() {
        let config = AppConfig { search_page_limit: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field, .. }) if field == "search_page_limit"));

        let config = AppConfig { search_default_total_pages: 0, ..Default::default() };
        assert!(
            matches!(config.validate(), Err(ConfigError::Invalid { field, .. }) if field == "search_default_total_pages")
        );

        let config = AppConfig { search_max_results: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field, .. }) if field == "search_max_results"));
    }

    #[test]
    fn test_validate_site_url() {
        let config = AppConfig { site_url: "not a url".into(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field, .. }) if field == "site_url"));

        let config = AppConfig { site_url: "ftp://example.com".into(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field, .. }) if field == "site_url"));
    }

    #[test]
    fn test_validate_edge_case_values() {
        let config = AppConfig { timeout_ms: 100, search_page_limit: 1, ..Default::default() };
        assert!(config.validate().is_ok());
    }
}
