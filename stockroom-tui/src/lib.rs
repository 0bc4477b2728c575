//! Stockroom TUI - terminal inventory browser
//!
//! Fetches the product catalog plus category/tag taxonomies from the
//! Catalog Service, lets the operator compose a filter (free-text search,
//! category multi-select, tag multi-select) and re-queries the service to
//! render the filtered product table.

pub mod app;
pub mod fetch;
pub mod render;
pub mod ui;

pub use app::{App, Focus};
pub use fetch::FetchEvent;
