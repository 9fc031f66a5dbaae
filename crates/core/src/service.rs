//! The cart-fetching capability consumed by the store.

use async_trait::async_trait;

use crate::error::CartFetchError;

/// External capability that retrieves a cart's item list by cart id.
///
/// One request/response exchange per call: no retries, no timeout, no
/// pagination. Implementations live outside this crate (the HTTP client in
/// `cart-store-client` is the production one); tests inject in-memory fakes.
#[async_trait]
pub trait CartService {
    /// Fetch the item identifiers currently in the cart `cart_id`.
    ///
    /// # Errors
    ///
    /// Returns [`CartFetchError`] if the service cannot produce a result.
    async fn fetch_cart(&self, cart_id: &str) -> Result<Vec<String>, CartFetchError>;
}
