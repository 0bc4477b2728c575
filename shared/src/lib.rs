//! Shared types for Stockroom
//!
//! Wire-format data models returned by the Catalog Service,
//! shared between the HTTP client and the terminal UI.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
