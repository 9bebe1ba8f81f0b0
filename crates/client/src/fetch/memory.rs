//! In-memory static source.
//!
//! Serves canned bodies or statuses by path and counts every request, which
//! makes cache behaviour observable without a network.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::Mutex;

use super::StaticSource;
use catalog_core::Error;

#[derive(Debug, Clone)]
enum Canned {
    Body(Bytes),
    Status(u16),
}

#[derive(Debug, Default)]
struct State {
    routes: HashMap<String, Canned>,
    hits: HashMap<String, usize>,
}

/// Static source backed by a path → response map.
///
/// Unknown paths answer with status 404.
#[derive(Debug, Default)]
pub struct MemorySource {
    state: Mutex<State>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `value` as JSON at `path`.
    pub fn with_json(mut self, path: impl Into<String>, value: &serde_json::Value) -> Self {
        let body = Bytes::from(value.to_string());
        self.state.get_mut().routes.insert(path.into(), Canned::Body(body));
        self
    }

    /// Serve a raw body at `path`.
    pub fn with_body(mut self, path: impl Into<String>, body: impl Into<Bytes>) -> Self {
        self.state.get_mut().routes.insert(path.into(), Canned::Body(body.into()));
        self
    }

    /// Answer `path` with a non-success status.
    pub fn with_status(mut self, path: impl Into<String>, status: u16) -> Self {
        self.state.get_mut().routes.insert(path.into(), Canned::Status(status));
        self
    }

    /// Replace the response at `path` while the source is shared.
    pub async fn set_json(&self, path: impl Into<String>, value: &serde_json::Value) {
        let body = Bytes::from(value.to_string());
        self.state.lock().await.routes.insert(path.into(), Canned::Body(body));
    }

    /// Number of requests made for `path`.
    pub async fn requests(&self, path: &str) -> usize {
        self.state.lock().await.hits.get(path).copied().unwrap_or(0)
    }
}

#[async_trait]
impl StaticSource for MemorySource {
    async fn fetch(&self, path: &str) -> Result<Bytes, Error> {
        let mut state = self.state.lock().await;
        *state.hits.entry(path.to_string()).or_insert(0) += 1;

        match state.routes.get(path) {
            Some(Canned::Body(body)) => Ok(body.clone()),
            Some(Canned::Status(status)) => Err(Error::HttpStatus(*status)),
            None => Err(Error::HttpStatus(404)),
        }
    }
}
