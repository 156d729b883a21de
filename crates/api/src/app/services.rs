//! Shared handler dependencies.
//!
//! Nothing here is a process-wide singleton: `main.rs` builds one
//! [`AppServices`] from configuration and tests build their own around a fake
//! store.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use catalog_infra::{store, CatalogConfig, ProductStore, StoreError};

use crate::app::views::Views;

pub struct AppServices {
    pub store: Arc<dyn ProductStore>,
    pub views: Views,
    pub static_dir: PathBuf,
}

impl AppServices {
    pub fn new(store: Arc<dyn ProductStore>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            views: Views::new(),
            static_dir: static_dir.into(),
        }
    }
}

/// Connect to the configured store and assemble the services.
pub async fn build_services(config: &CatalogConfig) -> Result<AppServices, StoreError> {
    let store = store::connect(&config.store).await?;
    info!(store = %config.store.describe(), "connected to product store");
    Ok(AppServices::new(store, config.static_dir.clone()))
}
