//! End-to-end tests: `CartStore` wired to the HTTP client against an
//! in-process fake of the upstream cart service.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;

use cart_store_client::{CartServiceConfig, HttpCartService};
use cart_store_core::{CartFetchError, CartStore, DEFAULT_CART_ID};

/// Serve `router` on an ephemeral local port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Test server failed");
    });
    format!("http://{addr}")
}

/// Build a store whose client points at `base_url`.
fn store_for(base_url: &str) -> CartStore<HttpCartService> {
    let config = CartServiceConfig::from_base_url(base_url).expect("Invalid test base URL");
    CartStore::new(HttpCartService::new(&config))
}

/// Fake service that returns two items for every cart.
fn stocked_cart_service() -> Router {
    Router::new().route(
        "/cart/{cart_id}/",
        get(|Path(cart_id): Path<String>| async move {
            Json(json!({"cart": {"id": cart_id, "items": ["p1", "p2"]}}))
        }),
    )
}

/// Fake service that echoes the requested cart id into the item list.
fn echoing_cart_service() -> Router {
    Router::new().route(
        "/cart/{cart_id}/",
        get(|Path(cart_id): Path<String>| async move {
            Json(json!({"cart": {"id": cart_id, "items": [format!("item-of-{cart_id}")]}}))
        }),
    )
}

/// Fake service that answers like the upstream does for an unseen cart id:
/// 200 with a freshly created cart whose item slice is null.
fn unknown_cart_service() -> Router {
    Router::new().route(
        "/cart/{cart_id}/",
        get(|Path(cart_id): Path<String>| async move {
            Json(json!({"cart": {"id": cart_id, "items": null}}))
        }),
    )
}

/// Fake service whose backing cache is down.
fn failing_cart_service() -> Router {
    Router::new().route(
        "/cart/{cart_id}/",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "redis: connection refused"})),
            )
        }),
    )
}

// ============================================================================
// Hydration
// ============================================================================

#[tokio::test]
async fn store_hydrates_from_service() {
    let base_url = serve(stocked_cart_service()).await;
    let mut store = store_for(&base_url);

    store.load_cart().await.expect("load_cart failed");

    assert_eq!(store.cart_items_count(), 2);
    assert!(store.is_item_in_cart("p1"));
    assert!(store.is_item_in_cart("p2"));
}

#[tokio::test]
async fn load_requests_the_active_cart_id() {
    let base_url = serve(echoing_cart_service()).await;
    let mut store = store_for(&base_url);
    assert_eq!(store.cart_id(), DEFAULT_CART_ID);

    store.load_cart().await.expect("load_cart failed");
    assert!(store.is_item_in_cart("item-of-777"));

    store.set_cart_id("42");
    store.load_cart().await.expect("load_cart failed");
    assert!(store.is_item_in_cart("item-of-42"));
    assert!(!store.is_item_in_cart("item-of-777"));
}

#[tokio::test]
async fn reload_discards_local_additions() {
    let base_url = serve(stocked_cart_service()).await;
    let mut store = store_for(&base_url);

    store.add_to_cart("local-only");
    store.load_cart().await.expect("load_cart failed");

    assert!(!store.is_item_in_cart("local-only"));
    assert_eq!(store.cart_items(), ["p1", "p2"]);
}

#[tokio::test]
async fn unknown_cart_hydrates_empty() {
    let base_url = serve(unknown_cart_service()).await;
    let mut store = store_for(&base_url);

    store.load_cart().await.expect("load_cart failed");

    assert_eq!(store.cart_items_count(), 0);
}

// ============================================================================
// Failure propagation
// ============================================================================

#[tokio::test]
async fn failing_service_propagates_and_preserves_state() {
    let base_url = serve(failing_cart_service()).await;
    let mut store = store_for(&base_url);

    store.add_to_cart("a");
    store.add_to_cart("a");
    store.add_to_cart("b");

    let err = store.load_cart().await.expect_err("load_cart should fail");
    match err {
        CartFetchError::Api { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("redis"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    // Prior contents stay exactly as they were, duplicates included.
    assert_eq!(store.cart_items(), ["a", "a", "b"]);
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);

    let mut store = store_for(&format!("http://{addr}"));
    let err = store.load_cart().await.expect_err("load_cart should fail");
    assert!(matches!(err, CartFetchError::Transport(_)));
}
