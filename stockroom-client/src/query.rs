//! Filter-query composition for the product listing

/// Query parameters for `GET /products/`
///
/// Serializes the operator's filter selection into the three optional
/// parameters the Catalog Service understands:
///
/// - `search` is present iff the text is non-empty;
/// - `category` is present iff at least one category id is selected,
///   value = comma-joined ids in selection order;
/// - `tag` follows the same rule as `category`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub search: String,
    pub categories: Vec<i64>,
    pub tags: Vec<i64>,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff no parameter would be emitted
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.categories.is_empty() && self.tags.is_empty()
    }

    /// Build the query pairs in the order the service documents them
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.search.is_empty() {
            params.push(("search", self.search.clone()));
        }
        if !self.categories.is_empty() {
            params.push(("category", join_ids(&self.categories)));
        }
        if !self.tags.is_empty() {
            params.push(("tag", join_ids(&self.tags)));
        }
        params
    }
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
