//! Origin resolution and request path construction.

/// Error type for origin resolution failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UrlError {
    #[error("empty origin")]
    Empty,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Resolve the configured origin into an absolute base URL string.
///
/// Absolute `http(s)` origins are used as-is; anything else is treated as a
/// path relative to `site_url`. The result never ends with `/`, so request
/// URLs are built as `{origin}{path}` and keep the origin's own path.
pub fn resolve_origin(origin: &str, site_url: &str) -> Result<String, UrlError> {
    let trimmed = origin.trim();

    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let parsed = if trimmed.contains("://") {
        url::Url::parse(trimmed).map_err(|e| UrlError::InvalidUrl(e.to_string()))?
    } else {
        let base = url::Url::parse(site_url).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;
        base.join(trimmed).map_err(|e| UrlError::InvalidUrl(e.to_string()))?
    };

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlError::UnsupportedScheme(scheme.to_string())),
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

/// Path of the catalog meta record.
pub const META_PATH: &str = "/meta.json";

/// First two characters of a file code.
///
/// Shorter codes yield a shorter (possibly empty) prefix.
pub fn shard_prefix(file_code: &str) -> &str {
    match file_code.char_indices().nth(2) {
        Some((idx, _)) => &file_code[..idx],
        None => file_code,
    }
}

/// `/detail/{prefix}/{file_code}.json`
pub fn detail_path(file_code: &str) -> String {
    format!("/detail/{}/{}.json", shard_prefix(file_code), file_code)
}

/// `/list/{page}.json`
pub fn list_path(page: i64) -> String {
    format!("/list/{page}.json")
}

/// `/index/{prefix}.json`
pub fn index_path(prefix: &str) -> String {
    format!("/index/{prefix}.json")
}
