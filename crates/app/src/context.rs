//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    config::AppConfig,
    domain::{
        cart::CartStore,
        catalog::{CatalogError, HttpCatalog},
    },
    notifications::ErrorSink,
    storage::{FileStore, StorageError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build catalog client")]
    Catalog(#[source] CatalogError),

    #[error("failed to load cart snapshot")]
    Storage(#[source] StorageError),
}

/// Application root owning the cart store. Consumers share the store through
/// the `Arc`.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub cart: Arc<CartStore>,
}

impl AppContext {
    /// Build the application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog client cannot be built or the
    /// persisted snapshot cannot be read.
    pub async fn from_config(
        config: &AppConfig,
        errors: Arc<dyn ErrorSink>,
    ) -> Result<Self, AppInitError> {
        let catalog =
            HttpCatalog::new((&config.catalog).into()).map_err(AppInitError::Catalog)?;

        let storage = FileStore::new(&config.storage.storage_path);

        let cart = CartStore::load(Arc::new(catalog), Arc::new(storage), errors)
            .await
            .map_err(AppInitError::Storage)?;

        Ok(Self {
            cart: Arc::new(cart),
        })
    }
}
