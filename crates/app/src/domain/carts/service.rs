//! Cart store.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    catalog::CatalogService,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{Cart, UpdateProductAmount},
        },
        products::{Product, ProductId},
    },
    notifications::{Notice, Notifier},
    storage::KeyValueStore,
};

/// Storage key the serialized cart lives under.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// The shopper's cart, mirrored to durable storage after every change.
///
/// Each operation holds the cart lock from its first read until its commit,
/// including while waiting on the catalog service, so concurrent calls are
/// applied one after another.
pub struct CartStore {
    cart: Mutex<Cart>,
    storage: Arc<dyn KeyValueStore>,
    catalog: Arc<dyn CatalogService>,
    notifier: Arc<dyn Notifier>,
}

impl CartStore {
    /// Load the cart previously persisted in `storage`.
    ///
    /// An absent or blank value yields an empty cart. Stored entries with a
    /// zero or negative amount or a repeated id are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read or the stored value is
    /// not a valid cart.
    pub fn load(
        storage: Arc<dyn KeyValueStore>,
        catalog: Arc<dyn CatalogService>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, CartsServiceError> {
        let cart = match storage.get(CART_STORAGE_KEY)? {
            Some(stored) if !stored.trim().is_empty() => {
                serde_json::from_str(&stored).map_err(CartsServiceError::CorruptCart)?
            }
            Some(_) | None => Cart::new(),
        };

        info!(items = cart.len(), "cart loaded");

        Ok(Self {
            cart: Mutex::new(cart),
            storage,
            catalog,
            notifier,
        })
    }

    /// Snapshot of the current cart.
    pub async fn cart(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    /// Add one unit of `product_id`, appending it when not yet in the cart.
    ///
    /// Failures are reported through the notifier, never returned.
    pub async fn add_product(&self, product_id: ProductId) {
        let mut cart = self.cart.lock().await;

        if let Err(error) = self.try_add_product(&mut cart, product_id).await {
            self.report(product_id, &error, Notice::AddFailed);
        }
    }

    /// Remove the entry for `product_id`.
    ///
    /// Failures are reported through the notifier, never returned.
    pub async fn remove_product(&self, product_id: ProductId) {
        let mut cart = self.cart.lock().await;

        if let Err(error) = self.try_remove_product(&mut cart, product_id) {
            self.report(product_id, &error, Notice::RemoveFailed);
        }
    }

    /// Set the held amount of a product already in the cart.
    ///
    /// Zero or negative amounts are ignored without a notice. Other failures
    /// are reported through the notifier, never returned.
    pub async fn update_product_amount(&self, update: UpdateProductAmount) {
        if update.amount <= 0 {
            debug!(
                product = %update.product_id,
                amount = update.amount,
                "ignoring non-positive amount"
            );

            return;
        }

        let mut cart = self.cart.lock().await;

        if let Err(error) = self.try_update_product_amount(&mut cart, update).await {
            self.report(update.product_id, &error, Notice::UpdateFailed);
        }
    }

    async fn try_add_product(
        &self,
        cart: &mut Cart,
        product_id: ProductId,
    ) -> Result<(), CartsServiceError> {
        let stock = self.catalog.stock(product_id).await?;
        let current_amount = cart.get(product_id).map_or(0, |product| product.amount);

        let Some(requested) = current_amount
            .checked_add(1)
            .filter(|requested| *requested <= stock.amount)
        else {
            return Err(CartsServiceError::StockExceeded {
                requested: current_amount.saturating_add(1),
                available: stock.amount,
            });
        };

        let mut updated = cart.clone();

        if let Some(product) = updated.get_mut(product_id) {
            product.amount = requested;
        } else {
            let product = self.catalog.product(product_id).await?;

            updated.push(Product::from(product));
        }

        self.commit(cart, updated)
    }

    fn try_remove_product(
        &self,
        cart: &mut Cart,
        product_id: ProductId,
    ) -> Result<(), CartsServiceError> {
        let mut updated = cart.clone();

        if !updated.remove(product_id) {
            return Err(CartsServiceError::NotFound);
        }

        self.commit(cart, updated)
    }

    async fn try_update_product_amount(
        &self,
        cart: &mut Cart,
        update: UpdateProductAmount,
    ) -> Result<(), CartsServiceError> {
        if cart.get(update.product_id).is_none() {
            return Err(CartsServiceError::NotFound);
        }

        let stock = self.catalog.stock(update.product_id).await?;

        if update.amount > stock.amount {
            return Err(CartsServiceError::StockExceeded {
                requested: update.amount,
                available: stock.amount,
            });
        }

        let mut updated = cart.clone();

        updated
            .get_mut(update.product_id)
            .ok_or(CartsServiceError::NotFound)?
            .amount = update.amount;

        self.commit(cart, updated)
    }

    /// Persist `updated`, then make it the in-memory cart. Nothing changes
    /// when the write fails.
    fn commit(&self, cart: &mut Cart, updated: Cart) -> Result<(), CartsServiceError> {
        let serialized = serde_json::to_string(&updated).map_err(CartsServiceError::Serialization)?;

        self.storage.set(CART_STORAGE_KEY, &serialized)?;

        debug!(items = updated.len(), units = updated.item_count(), "cart committed");

        *cart = updated;

        Ok(())
    }

    fn report(&self, product_id: ProductId, error: &CartsServiceError, fallback: Notice) {
        let notice = error.notice(fallback);

        warn!(product = %product_id, ?notice, "cart operation failed: {error}");

        self.notifier.error(notice);
    }
}

impl Debug for CartStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}
