use std::sync::RwLock;

use async_trait::async_trait;

use catalog_core::ProductId;
use catalog_products::{Product, ProductFields, ProductFilter};

use super::{ProductStore, StoreError};

/// In-memory product store for tests/dev.
///
/// Documents are kept in insertion order; lookups are linear scans.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a fixed set of documents (ids included).
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            inner: RwLock::new(products.into_iter().collect()),
        }
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("in-memory store lock poisoned".to_string())
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        let docs = self.inner.read().map_err(poisoned)?;
        Ok(docs.iter().filter(|p| filter.matches(p)).cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let docs = self.inner.read().map_err(poisoned)?;
        Ok(docs.iter().find(|p| p.id.as_str() == id).cloned())
    }

    async fn create(&self, fields: ProductFields) -> Result<Product, StoreError> {
        let product = Product::from_fields(ProductId::generate(), fields);
        let mut docs = self.inner.write().map_err(poisoned)?;
        docs.push(product.clone());
        Ok(product)
    }

    async fn update_by_id(
        &self,
        id: &str,
        fields: ProductFields,
    ) -> Result<Option<Product>, StoreError> {
        let mut docs = self.inner.write().map_err(poisoned)?;
        Ok(docs.iter_mut().find(|p| p.id.as_str() == id).map(|p| {
            p.replace_fields(fields);
            p.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let mut docs = self.inner.write().map_err(poisoned)?;
        let idx = docs.iter().position(|p| p.id.as_str() == id);
        Ok(idx.map(|idx| docs.remove(idx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, categories: &[&str]) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            price: 10.0,
            stock: 1.0,
        }
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let store = InMemoryProductStore::new();
        let a = store.create(fields("Laptop", &["Work"])).await.unwrap();
        let b = store.create(fields("Laptop", &["Work"])).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.find_by_id(a.id.as_str()).await.unwrap(), Some(a));
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order_and_filters_by_category() {
        let store = InMemoryProductStore::new();
        store.create(fields("Laptop", &["Computers", "Electronics"])).await.unwrap();
        store.create(fields("Chair", &["Furniture"])).await.unwrap();
        store.create(fields("Phone", &["Electronics"])).await.unwrap();

        let all = store.find_all(&ProductFilter::any()).await.unwrap();
        let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Laptop", "Chair", "Phone"]);

        let electronics = store
            .find_all(&ProductFilter::category("Electronics"))
            .await
            .unwrap();
        let names: Vec<_> = electronics.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Laptop", "Phone"]);

        assert!(store
            .find_all(&ProductFilter::category("Garden"))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn update_replaces_fields_in_place() {
        let store = InMemoryProductStore::new();
        let p = store.create(fields("Laptop", &["Work"])).await.unwrap();

        let updated = store
            .update_by_id(p.id.as_str(), fields("Desktop", &["Home"]))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, p.id);
        assert_eq!(updated.name, "Desktop");
        assert_eq!(updated.categories, ["Home"]);

        let stored = store.find_by_id(p.id.as_str()).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found_rather_than_errors() {
        let store = InMemoryProductStore::new();
        assert_eq!(store.find_by_id("nope").await.unwrap(), None);
        assert_eq!(store.update_by_id("nope", fields("x", &[])).await.unwrap(), None);
        assert_eq!(store.delete_by_id("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_removes_and_returns_document() {
        let store = InMemoryProductStore::with_products([Product {
            id: ProductId::from("1"),
            name: "Laptop".into(),
            price: 999.99,
            stock: 12.0,
            categories: vec!["Work".into()],
        }]);

        let removed = store.delete_by_id("1").await.unwrap().unwrap();
        assert_eq!(removed.name, "Laptop");
        assert_eq!(store.find_by_id("1").await.unwrap(), None);
        assert_eq!(store.delete_by_id("1").await.unwrap(), None);
    }
}
