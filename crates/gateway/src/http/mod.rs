//! # HTTP Surface
//!
//! | Method & path          | Success body                                   |
//! |------------------------|------------------------------------------------|
//! | `GET /products/{id}`   | Product                                        |
//! | `DELETE /products/{id}`| `{"message": "Product deleted successfully"}`  |
//! | `POST /products`       | `{"id": "<product id>"}`                       |
//! | `GET /orders/{id}`     | enriched Order                                 |
//! | `POST /orders`         | `{"id": <order id>}`                           |
//! | `GET /orders`          | `{"orders": [...], "total": <n>}`              |
//!
//! Failures are rendered by [`GatewayError`](crate::error::GatewayError)'s `IntoResponse`.

pub mod handlers;

use crate::service::Gateway;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Builds the gateway router.
pub fn router(gateway: Gateway) -> Router {
    Router::new()
        .route("/products", post(handlers::create_product))
        .route(
            "/products/{id}",
            get(handlers::get_product).delete(handlers::delete_product),
        )
        .route(
            "/orders",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .route("/orders/{id}", get(handlers::get_order))
        .layer(TraceLayer::new_for_http())
        .with_state(gateway)
}
