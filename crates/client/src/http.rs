//! `reqwest`-based implementation of the `CartService` capability.
//!
//! Talks to the cart service's REST API: `GET {base}/cart/{cart_id}/`
//! returns the cart wrapped in a `{"cart": ...}` envelope.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use cart_store_core::{Cart, CartFetchError, CartService};

use crate::config::CartServiceConfig;

/// HTTP client for the upstream cart service.
#[derive(Debug, Clone)]
pub struct HttpCartService {
    client: reqwest::Client,
    base_url: String,
}

/// Envelope the cart service wraps cart responses in.
#[derive(Debug, Deserialize)]
struct CartEnvelope {
    cart: Cart,
}

impl HttpCartService {
    /// Create a new cart service client.
    #[must_use]
    pub fn new(config: &CartServiceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }
}

#[async_trait]
impl CartService for HttpCartService {
    /// One request/response exchange; no retries, no timeout, no pagination.
    #[instrument(skip(self), fields(cart_id = %cart_id))]
    async fn fetch_cart(&self, cart_id: &str) -> Result<Vec<String>, CartFetchError> {
        let url = format!("{}/cart/{cart_id}/", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CartFetchError::Transport(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CartFetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: CartEnvelope = response
            .json()
            .await
            .map_err(|e| CartFetchError::Parse(e.to_string()))?;

        debug!(items = envelope.cart.items.len(), "Fetched cart");
        Ok(envelope.cart.items)
    }
}
