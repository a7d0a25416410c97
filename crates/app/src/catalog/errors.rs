//! Catalog client errors.

use thiserror::Error;

/// Errors that can occur when talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested product or stock entry does not exist.
    #[error("catalog resource not found")]
    NotFound,

    /// The service answered with a non-2xx status.
    #[error("unexpected response from catalog ({status}): {body}")]
    UnexpectedResponse {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// An HTTP transport or decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
