//! Integration tests for the cart store.
//!
//! The tests in `tests/` spin up an in-process fake of the upstream cart
//! service with `axum` on an ephemeral port, point the HTTP client at it,
//! and exercise the store end to end. No external services are required.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cart-store-integration-tests
//! ```
