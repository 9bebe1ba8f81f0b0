//! Core types and shared functionality for the catalog data layer.
//!
//! This crate provides:
//! - Catalog data model (meta, list pages, item summaries)
//! - Process-lifetime in-memory result cache
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;
pub mod model;

pub use cache::{CacheStats, CatalogCache};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use model::{DEFAULT_PER_PAGE, ItemSummary, ListPage, Meta};
