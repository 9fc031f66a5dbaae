//! HTTP client for the upstream cart service.
//!
//! Implements the `CartService` capability from `cart-store-core` over the
//! cart service's REST API. A typical application wires it up once at
//! startup:
//!
//! ```rust,no_run
//! use cart_store_client::{CartServiceConfig, HttpCartService};
//! use cart_store_core::CartStore;
//!
//! # fn main() -> Result<(), cart_store_client::ConfigError> {
//! let config = CartServiceConfig::from_env()?;
//! let store = CartStore::new(HttpCartService::new(&config));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod http;

pub use config::{CartServiceConfig, ConfigError};
pub use http::HttpCartService;
