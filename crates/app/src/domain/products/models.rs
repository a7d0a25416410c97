//! Product Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wrap a raw catalog id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw catalog id.
    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

/// Catalog Product
///
/// The payload served by `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// Catalog id.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Product image URL.
    pub image: String,
}

/// Cart Product
///
/// A catalog product together with the quantity held in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog id.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Product image URL.
    pub image: String,
    /// Units held. Signed so that stored non-positive amounts still decode;
    /// a [`Cart`](crate::domain::carts::Cart) only ever keeps positive ones.
    pub amount: i64,
}

impl Product {
    /// Line price: unit price times the held amount.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.amount)
    }
}

impl From<CatalogProduct> for Product {
    fn from(product: CatalogProduct) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            amount: 1,
        }
    }
}

/// Stock Model
///
/// Available quantity reported by `GET /stock/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    /// Catalog id.
    pub id: ProductId,
    /// Units available.
    pub amount: i64,
}
