//! Stockroom Client - HTTP client for the Catalog Service
//!
//! Provides typed read calls against the Catalog Service REST API
//! (products, categories, tags) and the filter-query composition used
//! by the product listing.

pub mod config;
pub mod error;
pub mod http;
pub mod query;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use http::CatalogClient;
pub use query::ProductQuery;

// Re-export for callers matching on `ClientError::Status`
pub use reqwest::StatusCode;

// Re-export shared models for convenience
pub use shared::models::{Category, Product, Tag};
