//! Cache-related MCP tools.
//!
//! This module provides tools for inspecting the in-memory catalog cache.

pub mod stats;

pub use stats::stats_impl;
