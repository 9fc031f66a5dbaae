//! Cart Store Core - cart domain library.
//!
//! This crate holds the in-memory shopping cart state and the seam to the
//! upstream cart service:
//!
//! - [`CartStore`] - single source of truth for the cart during a session
//! - [`CartService`] - the external fetch capability the store consumes
//! - [`CartFetchError`] - the one failure category at that boundary
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere. The HTTP
//! implementation of [`CartService`] lives in `cart-store-client`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use error::CartFetchError;
pub use model::Cart;
pub use service::CartService;
pub use store::{CartStore, DEFAULT_CART_ID};
