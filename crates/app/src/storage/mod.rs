//! Durable key-value storage.
//!
//! The cart is persisted as a single serialized value under a fixed key, so
//! any string-keyed string store can back it.

use mockall::automock;

mod errors;
mod file;
mod memory;

pub use errors::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// String-keyed durable store of string values.
#[automock]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
