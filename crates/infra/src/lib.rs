//! Infrastructure layer: product persistence backends and configuration.

pub mod config;
pub mod store;

pub use config::{CatalogConfig, ConfigError, StoreBackend};
pub use store::{InMemoryProductStore, ProductStore, StoreError};
#[cfg(feature = "postgres")]
pub use store::PostgresProductStore;
