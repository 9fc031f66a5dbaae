//! In-memory shopping cart state container.
//!
//! [`CartStore`] is the single source of truth for the cart during an
//! application session. Derived values (`cart_items_count`, `is_item_in_cart`)
//! are recomputed on demand from the item list rather than stored separately.

use crate::error::CartFetchError;
use crate::service::CartService;

/// Placeholder cart id used until a cart-selection mechanism exists.
pub const DEFAULT_CART_ID: &str = "777";

/// In-memory cart state with an injected fetch capability.
///
/// The store exclusively owns its item list and cart id. Items are an
/// ordered list of identifier strings; duplicates are permitted and
/// insertion order is preserved (order carries no meaning beyond display).
///
/// Mutations take `&mut self` and run on one logical thread of control;
/// hosts that share a store across tasks or threads must guard it with a
/// mutex themselves.
#[derive(Debug)]
pub struct CartStore<S> {
    cart_id: String,
    cart_items: Vec<String>,
    service: S,
}

impl<S: CartService> CartStore<S> {
    /// Create an empty store bound to the given cart service.
    ///
    /// The cart id starts at [`DEFAULT_CART_ID`].
    #[must_use]
    pub fn new(service: S) -> Self {
        Self {
            cart_id: DEFAULT_CART_ID.to_string(),
            cart_items: Vec::new(),
            service,
        }
    }

    /// The active cart identifier.
    #[must_use]
    pub fn cart_id(&self) -> &str {
        &self.cart_id
    }

    /// Switch the store to a different cart.
    ///
    /// Does not touch the item list; call [`load_cart`](Self::load_cart) to
    /// hydrate from the new cart.
    pub fn set_cart_id(&mut self, cart_id: impl Into<String>) {
        self.cart_id = cart_id.into();
    }

    /// Read-only view of the current items, in insertion order.
    #[must_use]
    pub fn cart_items(&self) -> &[String] {
        &self.cart_items
    }

    /// Number of items currently in the cart, duplicates counted.
    #[must_use]
    pub fn cart_items_count(&self) -> usize {
        self.cart_items.len()
    }

    /// Whether `item_id` occurs at least once in the cart.
    #[must_use]
    pub fn is_item_in_cart(&self, item_id: &str) -> bool {
        self.cart_items.iter().any(|item| item == item_id)
    }

    /// Replace the cart contents with whatever the service holds for the
    /// active cart id.
    ///
    /// Overwrites any prior content, including items added locally since the
    /// last load. No retry, timeout, or cancellation; callers needing any of
    /// those layer them outside the store.
    ///
    /// # Errors
    ///
    /// Propagates [`CartFetchError`] unchanged; the item list keeps its
    /// prior content on failure.
    pub async fn load_cart(&mut self) -> Result<(), CartFetchError> {
        self.cart_items = self.service.fetch_cart(&self.cart_id).await?;
        Ok(())
    }

    /// Append an item to the end of the cart.
    ///
    /// No deduplication: adding an item already present results in two
    /// occurrences.
    pub fn add_to_cart(&mut self, item: impl Into<String>) {
        self.cart_items.push(item.into());
    }

    /// Remove every occurrence of `item` from the cart.
    ///
    /// Removing an item that is not present is a no-op.
    pub fn remove_from_cart(&mut self, item: &str) {
        self.cart_items.retain(|i| i != item);
    }
}
