//! Storage errors.

use std::io;

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`](super::KeyValueStore).
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem access failed.
    #[error("storage io error")]
    Io(#[from] io::Error),

    /// The backing document could not be decoded or encoded.
    #[error("storage file is not a valid key-value document")]
    Serialization(#[from] serde_json::Error),

    /// A writer panicked while holding the store lock.
    #[error("storage lock poisoned")]
    Poisoned,
}
