//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    catalog::{CatalogError, HttpCatalogClient},
    config::AppConfig,
    domain::carts::{CartStore, CartsServiceError},
    notifications::Notifier,
    storage::FileStore,
};

/// Errors raised while wiring the application together.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The HTTP client could not be built.
    #[error("failed to build catalog client")]
    Catalog(#[source] CatalogError),

    /// The persisted cart could not be loaded.
    #[error("failed to load cart")]
    Cart(#[source] CartsServiceError),
}

/// Shared application services.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// The shopper's cart.
    pub cart: Arc<CartStore>,
}

impl AppContext {
    /// Build application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built or the persisted
    /// cart cannot be loaded.
    pub fn from_config(
        config: &AppConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, AppInitError> {
        let catalog = HttpCatalogClient::new(config.catalog.catalog_config())
            .map_err(AppInitError::Catalog)?;

        let storage = FileStore::new(&config.storage.storage_path);

        let cart = CartStore::load(Arc::new(storage), Arc::new(catalog), notifier)
            .map_err(AppInitError::Cart)?;

        Ok(Self {
            cart: Arc::new(cart),
        })
    }
}
