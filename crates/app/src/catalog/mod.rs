//! Remote catalog and stock service.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::products::{CatalogProduct, ProductId, Stock};

mod client;
mod errors;

pub use client::{CatalogConfig, HttpCatalogClient};
pub use errors::CatalogError;

/// Source of product data and live stock levels.
#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieve the available stock for a product.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the product is unknown.
    async fn stock(&self, product: ProductId) -> Result<Stock, CatalogError>;

    /// Retrieve a product's catalog data.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the product is unknown.
    async fn product(&self, product: ProductId) -> Result<CatalogProduct, CatalogError>;
}
