//! View-model controller
//!
//! Owns all client-side state. Every transition is a plain synchronous
//! method, so the whole controller is testable without a terminal.

use tui_input::Input;

use crate::fetch::FetchEvent;
use shared::models::{Category, Product, Tag};
use stockroom_client::{ClientError, ProductQuery};

/// Which part of the filter panel receives key input
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Search,
    Categories,
    Tags,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Categories,
            Focus::Categories => Focus::Tags,
            Focus::Tags => Focus::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::Tags,
            Focus::Categories => Focus::Search,
            Focus::Tags => Focus::Categories,
        }
    }
}

/// Client-side application state
///
/// The three collections are read-only caches, each replaced wholesale by
/// its fetch path. Selection sets hold ids from the fetched universe,
/// duplicate-free and in first-insertion order. Nothing is persisted.
#[derive(Default)]
pub struct App {
    /// Displayed product collection
    pub products: Vec<Product>,
    /// Full universe of selectable categories, fetched once
    pub categories: Vec<Category>,
    /// Full universe of selectable tags, fetched once
    pub tags: Vec<Tag>,

    /// Free-text search field state
    pub search: Input,
    /// Transient pending slot for the category selector
    pub pending_category: String,
    /// Transient pending slot for the tag selector
    pub pending_tag: String,
    pub selected_categories: Vec<i64>,
    pub selected_tags: Vec<i64>,

    pub focus: Focus,
    pub category_cursor: usize,
    pub tag_cursor: usize,
    pub should_quit: bool,

    // Monotonic sequencing for product responses: a response older than
    // the last applied one is discarded instead of clobbering newer data.
    products_seq: u64,
    applied_seq: u64,

    // Initial-render gating: one flag per load path, set on first report
    // regardless of outcome.
    got_products: bool,
    got_categories: bool,
    got_tags: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Still waiting on one of the three initial fetches
    pub fn is_loading(&self) -> bool {
        !(self.got_products && self.got_categories && self.got_tags)
    }

    /// Allocate the sequence number for the next product fetch
    pub fn next_products_seq(&mut self) -> u64 {
        self.products_seq += 1;
        self.products_seq
    }

    // ==================== Selection transitions ====================

    /// Pending-select: stage a category selector value
    pub fn select_category(&mut self, raw: impl Into<String>) {
        self.pending_category = raw.into();
    }

    /// Pending-select: stage a tag selector value
    pub fn select_tag(&mut self, raw: impl Into<String>) {
        self.pending_tag = raw.into();
    }

    /// Add the pending category id to the selection set
    ///
    /// The pending slot must parse as a positive integer not already
    /// present; it is cleared afterward regardless of outcome.
    pub fn add_category(&mut self) {
        let pending = std::mem::take(&mut self.pending_category);
        push_unique(&mut self.selected_categories, &pending);
    }

    /// Add the pending tag id to the selection set
    pub fn add_tag(&mut self) {
        let pending = std::mem::take(&mut self.pending_tag);
        push_unique(&mut self.selected_tags, &pending);
    }

    /// Remove a category id from the selection set; no-op if absent
    pub fn remove_category(&mut self, id: i64) {
        self.selected_categories.retain(|&selected| selected != id);
    }

    /// Remove a tag id from the selection set; no-op if absent
    pub fn remove_tag(&mut self, id: i64) {
        self.selected_tags.retain(|&selected| selected != id);
    }

    // ==================== Derived state ====================

    /// Serialize the current selection into a product query
    pub fn query(&self) -> ProductQuery {
        ProductQuery {
            search: self.search.value().to_string(),
            categories: self.selected_categories.clone(),
            tags: self.selected_tags.clone(),
        }
    }

    /// Display name for a selected category id, if still in the universe
    pub fn category_name(&self, id: i64) -> Option<&str> {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .map(|category| category.name.as_str())
    }

    /// Display name for a selected tag id, if still in the universe
    pub fn tag_name(&self, id: i64) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.id == id)
            .map(|tag| tag.name.as_str())
    }

    /// Category under the selector cursor
    pub fn highlighted_category(&self) -> Option<&Category> {
        self.categories.get(self.category_cursor)
    }

    /// Tag under the selector cursor
    pub fn highlighted_tag(&self) -> Option<&Tag> {
        self.tags.get(self.tag_cursor)
    }

    /// Move the focused selector cursor up
    pub fn cursor_up(&mut self) {
        match self.focus {
            Focus::Categories => self.category_cursor = self.category_cursor.saturating_sub(1),
            Focus::Tags => self.tag_cursor = self.tag_cursor.saturating_sub(1),
            Focus::Search => {}
        }
    }

    /// Move the focused selector cursor down
    pub fn cursor_down(&mut self) {
        match self.focus {
            Focus::Categories => {
                self.category_cursor = clamp_cursor(self.category_cursor + 1, self.categories.len());
            }
            Focus::Tags => {
                self.tag_cursor = clamp_cursor(self.tag_cursor + 1, self.tags.len());
            }
            Focus::Search => {}
        }
    }

    // ==================== Collection replacement ====================

    /// Dispatch one fetch-path report
    pub fn handle_fetch_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Products { seq, result } => self.apply_products(seq, result),
            FetchEvent::Categories(result) => self.apply_categories(result),
            FetchEvent::Tags(result) => self.apply_tags(result),
        }
    }

    /// Replace the product collection from a sequenced response
    ///
    /// A response older than the last applied one is discarded. On failure
    /// the previous collection stays displayed and the sequence does not
    /// advance.
    pub fn apply_products(&mut self, seq: u64, result: Result<Vec<Product>, ClientError>) {
        self.got_products = true;
        match result {
            Ok(products) => {
                if seq < self.applied_seq {
                    tracing::debug!(
                        "Discarding stale product response (seq {} < {})",
                        seq,
                        self.applied_seq
                    );
                    return;
                }
                self.applied_seq = seq;
                self.products = products;
            }
            Err(e) => tracing::error!("Error fetching products: {}", e),
        }
    }

    /// Replace the category universe; on failure the previous value stays
    pub fn apply_categories(&mut self, result: Result<Vec<Category>, ClientError>) {
        self.got_categories = true;
        match result {
            Ok(categories) => {
                self.categories = categories;
                self.category_cursor = clamp_cursor(self.category_cursor, self.categories.len());
            }
            Err(e) => tracing::error!("Error fetching categories: {}", e),
        }
    }

    /// Replace the tag universe; on failure the previous value stays
    pub fn apply_tags(&mut self, result: Result<Vec<Tag>, ClientError>) {
        self.got_tags = true;
        match result {
            Ok(tags) => {
                self.tags = tags;
                self.tag_cursor = clamp_cursor(self.tag_cursor, self.tags.len());
            }
            Err(e) => tracing::error!("Error fetching tags: {}", e),
        }
    }
}

/// Parse a pending slot and append it if it is a new positive id
fn push_unique(selection: &mut Vec<i64>, pending: &str) {
    let Ok(id) = pending.trim().parse::<i64>() else {
        return;
    };
    if id > 0 && !selection.contains(&id) {
        selection.push(id);
    }
}

fn clamp_cursor(cursor: usize, len: usize) -> usize {
    if len == 0 { 0 } else { cursor.min(len - 1) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use stockroom_client::StatusCode;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
        }
    }

    fn tag(id: i64, name: &str) -> Tag {
        Tag {
            id,
            name: name.to_string(),
        }
    }

    fn product(id: i64, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: String::new(),
            price: Decimal::new(950, 2),
            stock: 1,
            categories: vec![],
            tags: vec![],
        }
    }

    fn add_category_value(app: &mut App, raw: &str) {
        app.select_category(raw);
        app.add_category();
    }

    #[test]
    fn add_keeps_insertion_order_without_duplicates() {
        let mut app = App::new();
        add_category_value(&mut app, "2");
        add_category_value(&mut app, "5");
        add_category_value(&mut app, "2");
        add_category_value(&mut app, "9");
        add_category_value(&mut app, "5");
        assert_eq!(app.selected_categories, vec![2, 5, 9]);
    }

    #[test]
    fn add_rejects_invalid_values_and_clears_pending() {
        let mut app = App::new();
        for raw in ["", "0", "-3", "abc", "1.5"] {
            add_category_value(&mut app, raw);
            assert!(app.selected_categories.is_empty(), "accepted {:?}", raw);
            assert!(app.pending_category.is_empty());
        }

        // Pending is cleared even when the add succeeds
        add_category_value(&mut app, "7");
        assert_eq!(app.selected_categories, vec![7]);
        assert!(app.pending_category.is_empty());
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut app = App::new();
        add_category_value(&mut app, "2");
        app.remove_category(99);
        assert_eq!(app.selected_categories, vec![2]);

        app.remove_category(2);
        assert!(app.selected_categories.is_empty());
    }

    #[test]
    fn tag_selection_is_independent_of_categories() {
        let mut app = App::new();
        add_category_value(&mut app, "2");
        app.select_tag("2");
        app.add_tag();
        app.select_tag("4");
        app.add_tag();
        assert_eq!(app.selected_categories, vec![2]);
        assert_eq!(app.selected_tags, vec![2, 4]);

        app.remove_tag(2);
        assert_eq!(app.selected_tags, vec![4]);
        assert_eq!(app.selected_categories, vec![2]);
    }

    #[test]
    fn empty_state_builds_empty_query() {
        let app = App::new();
        let query = app.query();
        assert!(query.is_empty());
        assert!(query.params().is_empty());
    }

    #[test]
    fn query_reflects_search_and_selection() {
        let mut app = App::new();
        app.search = Input::new("chair".to_string());
        add_category_value(&mut app, "2");
        add_category_value(&mut app, "5");

        let params = app.query().params();
        assert_eq!(
            params,
            vec![
                ("search", "chair".to_string()),
                ("category", "2,5".to_string()),
            ]
        );
    }

    #[test]
    fn stale_product_response_is_discarded() {
        let mut app = App::new();
        let first = app.next_products_seq();
        let second = app.next_products_seq();

        app.apply_products(second, Ok(vec![product(1, "Desk")]));
        app.apply_products(first, Ok(vec![product(2, "Chair")]));

        assert_eq!(app.products.len(), 1);
        assert_eq!(app.products[0].name, "Desk");
    }

    #[test]
    fn failed_product_fetch_keeps_previous_collection() {
        let mut app = App::new();
        let seq = app.next_products_seq();
        app.apply_products(seq, Ok(vec![product(1, "Desk")]));

        let seq = app.next_products_seq();
        app.apply_products(
            seq,
            Err(ClientError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: String::new(),
            }),
        );
        assert_eq!(app.products.len(), 1);

        // A success from a request issued before the failed one still applies
        let earlier = 1;
        app.apply_products(earlier, Ok(vec![product(2, "Chair")]));
        assert_eq!(app.products[0].name, "Chair");
    }

    #[test]
    fn one_failed_load_path_leaves_the_others_populated() {
        let mut app = App::new();
        assert!(app.is_loading());

        let seq = app.next_products_seq();
        app.apply_products(seq, Ok(vec![product(1, "Desk")]));
        app.apply_categories(Ok(vec![category(2, "Furniture")]));
        app.apply_tags(Err(ClientError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: String::new(),
        }));

        assert!(!app.is_loading());
        assert_eq!(app.products.len(), 1);
        assert_eq!(app.categories.len(), 1);
        assert!(app.tags.is_empty());
    }

    #[test]
    fn name_lookup_uses_the_universe() {
        let mut app = App::new();
        app.apply_categories(Ok(vec![category(2, "Furniture"), category(5, "Office")]));
        app.apply_tags(Ok(vec![tag(4, "sale")]));

        assert_eq!(app.category_name(5), Some("Office"));
        assert_eq!(app.category_name(99), None);
        assert_eq!(app.tag_name(4), Some("sale"));
    }

    #[test]
    fn selector_cursor_clamps_to_universe() {
        let mut app = App::new();
        app.focus = Focus::Categories;
        app.cursor_down();
        assert_eq!(app.category_cursor, 0);

        app.apply_categories(Ok(vec![category(1, "A"), category(2, "B")]));
        app.cursor_down();
        app.cursor_down();
        app.cursor_down();
        assert_eq!(app.category_cursor, 1);

        app.cursor_up();
        app.cursor_up();
        app.cursor_up();
        assert_eq!(app.category_cursor, 0);

        // Universe replaced by a shorter list pulls the cursor back in range
        app.category_cursor = 1;
        app.apply_categories(Ok(vec![category(1, "A")]));
        assert_eq!(app.category_cursor, 0);
    }

    #[test]
    fn focus_cycles_through_all_panels() {
        let mut focus = Focus::Search;
        focus = focus.next();
        assert_eq!(focus, Focus::Categories);
        focus = focus.next();
        assert_eq!(focus, Focus::Tags);
        focus = focus.next();
        assert_eq!(focus, Focus::Search);
        assert_eq!(Focus::Search.prev(), Focus::Tags);
    }
}
