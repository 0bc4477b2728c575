//! Cell formatting for the product table
//!
//! Derived presentation only; nothing here is stored state.

use rust_decimal::Decimal;

/// Placeholder for a product without a description
pub const NO_DESCRIPTION: &str = "No description";

/// Placeholder for an empty category/tag list
pub const NO_TAXONOMY: &str = "None";

/// Placeholder row shown when the product collection is empty
pub const NO_PRODUCTS: &str = "No products found";

/// Format a price with exactly two fraction digits
pub fn format_price(price: &Decimal) -> String {
    format!("${:.2}", price)
}

/// Description text, or the placeholder when empty
pub fn description_cell(description: &str) -> &str {
    if description.is_empty() {
        NO_DESCRIPTION
    } else {
        description
    }
}

/// Bracketed name tokens in server order, or the placeholder when empty
pub fn taxonomy_cell<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let tokens: Vec<String> = names.into_iter().map(|name| format!("[{}]", name)).collect();
    if tokens.is_empty() {
        NO_TAXONOMY.to_string()
    } else {
        tokens.join(" ")
    }
}
