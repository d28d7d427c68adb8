//! # Catalog API
//!
//! HTTP access to the remote product catalog. Knows nothing about selection
//! or rendering: it turns two GET requests into typed results.

pub mod client;
pub mod types;

pub use client::{CatalogError, CatalogSource, DEFAULT_BASE_URL, HttpCatalogClient};
pub use types::{Category, Product};
