//! Carts

pub mod errors;
pub mod models;
pub mod service;
pub mod summary;

pub use errors::CartsServiceError;
pub use models::{Cart, UpdateProductAmount};
pub use service::*;
