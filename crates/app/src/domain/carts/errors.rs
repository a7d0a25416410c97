//! Carts service errors.

use thiserror::Error;

use crate::{catalog::CatalogError, notifications::Notice, storage::StorageError};

/// Errors raised while loading or changing a cart.
#[derive(Debug, Error)]
pub enum CartsServiceError {
    /// The stock service has fewer units than the cart would hold.
    #[error("requested amount {requested} exceeds available stock {available}")]
    StockExceeded {
        /// Units the cart would hold after the change.
        requested: i64,
        /// Units the stock service reported.
        available: i64,
    },

    /// The product has no entry in the cart.
    #[error("product not in cart")]
    NotFound,

    /// The catalog service request failed.
    #[error("catalog error")]
    Catalog(#[from] CatalogError),

    /// Reading or writing durable storage failed.
    #[error("storage error")]
    Storage(#[from] StorageError),

    /// The updated cart could not be serialized.
    #[error("failed to serialize cart")]
    Serialization(#[source] serde_json::Error),

    /// The persisted cart is not a valid product list.
    #[error("stored cart is corrupt")]
    CorruptCart(#[source] serde_json::Error),
}

impl CartsServiceError {
    /// The notice shown to the shopper for this error, given the operation's
    /// generic failure notice.
    pub(crate) fn notice(&self, fallback: Notice) -> Notice {
        match self {
            Self::StockExceeded { .. } => Notice::StockExceeded,
            _ => fallback,
        }
    }
}
