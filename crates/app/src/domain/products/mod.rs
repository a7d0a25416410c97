//! Products

pub mod models;

pub use models::{CatalogProduct, Product, ProductId, Stock};
