//! Failure category for the cart service boundary.

use thiserror::Error;

/// Errors that can occur when fetching a cart from the upstream service.
///
/// The store never catches or translates these: a failed
/// [`load_cart`](crate::store::CartStore::load_cart) surfaces the error
/// unchanged to the caller and leaves the cart contents as they were.
#[derive(Debug, Error)]
pub enum CartFetchError {
    /// Network or HTTP-level failure before a response was produced.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The service answered with a non-success status.
    #[error("cart service error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}
