use serde::{Deserialize, Serialize};

use catalog_core::ProductId;

/// A stored product document.
///
/// The shape is the contract shared with the document store: the id travels
/// as `_id`, and a document persisted without categories reads back with an
/// empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock: f64,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Product {
    pub fn from_fields(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
            stock: fields.stock,
            categories: fields.categories,
        }
    }

    /// Overwrite every mutable field, keeping the id.
    pub fn replace_fields(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.price = fields.price;
        self.stock = fields.stock;
        self.categories = fields.categories;
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

/// The four fields written by create and update.
///
/// Only obtainable from [`ProductFormData::validate`](crate::ProductFormData::validate)
/// outside of tests, so a value of this type always has a non-empty name and
/// non-zero numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub categories: Vec<String>,
    pub price: f64,
    pub stock: f64,
}

/// Store query used by the list operation.
///
/// Serializes to the document-store filter it stands for: `{}` or
/// `{"categories": "<category>"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    #[serde(rename = "categories", skip_serializing_if = "Option::is_none", default)]
    category: Option<String>,
}

impl ProductFilter {
    /// Matches every product.
    pub fn any() -> Self {
        Self { category: None }
    }

    /// Matches products whose category list contains `category` exactly.
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
        }
    }

    /// Build the filter from the optional `category` query parameter.
    ///
    /// An empty value selects everything, same as no value at all.
    pub fn from_query(category: Option<&str>) -> Self {
        match category {
            Some(c) if !c.is_empty() => Self::category(c),
            _ => Self::any(),
        }
    }

    pub fn category_value(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn matches(&self, product: &Product) -> bool {
        match &self.category {
            Some(c) => product.has_category(c),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn laptop() -> Product {
        Product {
            id: ProductId::from("1"),
            name: "Laptop".into(),
            price: 999.99,
            stock: 12.0,
            categories: vec!["Computers".into(), "Electronics".into(), "Work".into()],
        }
    }

    #[test]
    fn filter_serializes_to_document_query() {
        assert_eq!(serde_json::to_value(ProductFilter::any()).unwrap(), json!({}));
        assert_eq!(
            serde_json::to_value(ProductFilter::category("Electronics")).unwrap(),
            json!({ "categories": "Electronics" })
        );
    }

    #[test]
    fn empty_query_value_selects_everything() {
        assert_eq!(ProductFilter::from_query(None), ProductFilter::any());
        assert_eq!(ProductFilter::from_query(Some("")), ProductFilter::any());
        assert_eq!(
            ProductFilter::from_query(Some("Work")),
            ProductFilter::category("Work")
        );
    }

    #[test]
    fn category_filter_requires_exact_element_match() {
        let p = laptop();
        assert!(ProductFilter::any().matches(&p));
        assert!(ProductFilter::category("Electronics").matches(&p));
        assert!(!ProductFilter::category("electronics").matches(&p));
        assert!(!ProductFilter::category("Elec").matches(&p));
    }

    #[test]
    fn product_document_uses_underscore_id() {
        let v = serde_json::to_value(laptop()).unwrap();
        assert_eq!(v["_id"], "1");
        assert_eq!(v["name"], "Laptop");
        assert_eq!(v["categories"], json!(["Computers", "Electronics", "Work"]));
    }

    #[test]
    fn missing_categories_default_to_empty() {
        let p: Product = serde_json::from_value(json!({
            "_id": "7", "name": "Cable", "price": 3.5, "stock": 100
        }))
        .unwrap();
        assert!(p.categories.is_empty());
    }

    #[test]
    fn replace_fields_keeps_id() {
        let mut p = laptop();
        p.replace_fields(ProductFields {
            name: "Desktop".into(),
            categories: vec![],
            price: 1.0,
            stock: 2.0,
        });
        assert_eq!(p.id.as_str(), "1");
        assert_eq!(p.name, "Desktop");
        assert!(p.categories.is_empty());
    }
}
