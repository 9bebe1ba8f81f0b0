//! Unified error types for the catalog data layer.
//!
//! Accessors never surface these to their callers; they are produced by the
//! internal fetch primitive and collapsed into default values one level up.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Unified error types for catalog data access.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., empty file code).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Origin or request URL could not be built.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure (connection refused, DNS, reset).
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// Origin answered with a non-success status.
    #[error("HTTP_STATUS: {0}")]
    HttpStatus(u16),

    /// Fetch timeout.
    #[error("FETCH_TIMEOUT: {0}")]
    FetchTimeout(String),

    /// Response body was not the expected JSON shape.
    #[error("PARSE_ERROR: {0}")]
    Parse(String),
}

impl Error {
    /// Status code carried by the error, if the origin produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::InvalidUrl(msg) => (-32003, msg.clone()),
            Error::FetchTimeout(msg) => (-32006, msg.clone()),
            Error::HttpError(msg) => (-32008, msg.clone()),
            Error::HttpStatus(status) => (-32008, format!("status {status}")),
            Error::Parse(msg) => (-32000, msg.clone()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}
