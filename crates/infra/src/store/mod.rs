//! Product persistence abstractions.
//!
//! The API layer only ever sees `Arc<dyn ProductStore>`; which backend sits
//! behind it is decided once at startup from the configured store URI.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use catalog_products::{Product, ProductFields, ProductFilter};

use crate::config::StoreBackend;

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryProductStore;
#[cfg(feature = "postgres")]
pub use postgres::PostgresProductStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not serve the call (poisoned lock, lost connection, ...).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The configured backend is not compiled into this build.
    #[error("unsupported store backend: {0}")]
    Unsupported(String),

    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Keyed product collection.
///
/// Every method is a single round trip; callers never retry. Ids are passed as
/// plain strings: an id the backend never issued is simply not found.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products matching `filter`, in insertion order.
    async fn find_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError>;

    /// Insert a new document under a freshly minted id.
    async fn create(&self, fields: ProductFields) -> Result<Product, StoreError>;

    /// Replace the fields of an existing document. `None` if nothing matched.
    async fn update_by_id(
        &self,
        id: &str,
        fields: ProductFields,
    ) -> Result<Option<Product>, StoreError>;

    /// Remove a document, returning it. `None` if nothing matched.
    async fn delete_by_id(&self, id: &str) -> Result<Option<Product>, StoreError>;
}

#[async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn find_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        (**self).find_all(filter).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn create(&self, fields: ProductFields) -> Result<Product, StoreError> {
        (**self).create(fields).await
    }

    async fn update_by_id(
        &self,
        id: &str,
        fields: ProductFields,
    ) -> Result<Option<Product>, StoreError> {
        (**self).update_by_id(id, fields).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        (**self).delete_by_id(id).await
    }
}

/// Open the backend selected by configuration.
pub async fn connect(backend: &StoreBackend) -> Result<Arc<dyn ProductStore>, StoreError> {
    match backend {
        StoreBackend::Memory => {
            tracing::warn!("using in-memory product store; data is lost on restart");
            Ok(Arc::new(InMemoryProductStore::new()))
        }
        #[cfg(feature = "postgres")]
        StoreBackend::Postgres { url } => {
            let store = PostgresProductStore::connect(url).await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "postgres"))]
        StoreBackend::Postgres { .. } => Err(StoreError::Unsupported(
            "postgres (rebuild with --features postgres)".to_string(),
        )),
    }
}
