//! Shopping cart for the RocketShoes storefront.
//!
//! [`CartStore`](domain::carts::CartStore) holds the shopper's cart, mirrors
//! every change into a [`KeyValueStore`](storage::KeyValueStore) and checks
//! quantity increases against the remote [`CatalogService`](catalog::CatalogService).

pub mod catalog;
pub mod config;
pub mod context;
pub mod domain;
pub mod logging;
pub mod notifications;
pub mod storage;
