//! Client code for the catalog data layer.
//!
//! This crate provides the HTTP fetch pipeline against the static origin,
//! the cached catalog accessors, and the fallback full-text search shared by
//! the server.

pub mod catalog;
pub mod fetch;

pub use catalog::{Catalog, SearchOptions};
pub use fetch::{FetchClient, FetchConfig, MemorySource, StaticSource};
