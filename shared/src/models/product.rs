//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, Tag};

/// Product entity
///
/// The service nests the full category and tag objects on each product,
/// ordered server-side. `price` arrives as either a JSON string (`"9.50"`)
/// or a bare number (`9.5`); both forms deserialize into [`Decimal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// May be empty; the UI substitutes a placeholder when it is.
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub stock: i64,
    /// Categories this product belongs to, in server order.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Tags attached to this product, in server order.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_product() {
        let json = r#"{
            "id": 7,
            "name": "Desk Chair",
            "description": "Ergonomic swivel chair",
            "price": "129.90",
            "stock": 12,
            "categories": [{"id": 2, "name": "Furniture"}, {"id": 5, "name": "Office"}],
            "tags": [{"id": 1, "name": "sale"}]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Desk Chair");
        assert_eq!(product.price.to_string(), "129.90");
        assert_eq!(product.stock, 12);
        assert_eq!(product.categories.len(), 2);
        assert_eq!(product.categories[0].name, "Furniture");
        assert_eq!(product.tags[0].name, "sale");
    }

    #[test]
    fn price_accepts_bare_number() {
        let json = r#"{"id": 1, "name": "Mug", "description": "", "price": 9.5, "stock": 3}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Decimal::new(95, 1));
    }

    #[test]
    fn optional_fields_default() {
        // description / categories / tags omitted entirely
        let json = r#"{"id": 2, "name": "Crate", "price": "4.00", "stock": 0}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.description.is_empty());
        assert!(product.categories.is_empty());
        assert!(product.tags.is_empty());
    }
}
