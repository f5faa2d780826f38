//! # Backend Interfaces
//!
//! The two narrow interfaces the gateway is built against. Each call blocks the calling
//! handler until the backend replies, and reports expected conditions (a missing record)
//! as a named error variant rather than a panic or a generic failure.
//!
//! Implementations are injected into [`Gateway`](crate::service::Gateway) at construction.
//! The in-process implementations are [`CatalogClient`](crate::clients::CatalogClient) and
//! [`OrdersClient`](crate::clients::OrdersClient); tests may supply their own.

use crate::catalog_actor::CatalogError;
use crate::model::{LineItem, Order, OrderId, Product, ProductId};
use crate::orders_actor::OrdersError;
use async_trait::async_trait;

/// The product catalog.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Fetches one product, or [`CatalogError::NotFound`].
    async fn get(&self, id: &ProductId) -> Result<Product, CatalogError>;

    /// Deletes one product, or reports [`CatalogError::NotFound`].
    async fn delete(&self, id: &ProductId) -> Result<(), CatalogError>;

    /// Stores a product under its own id and returns that id.
    async fn create(&self, product: Product) -> Result<ProductId, CatalogError>;
}

/// The order ledger.
#[async_trait]
pub trait OrdersBackend: Send + Sync {
    /// Fetches one order, or [`OrdersError::NotFound`].
    async fn get_order(&self, id: OrderId) -> Result<Order, OrdersError>;

    /// Fetches the first order containing a line item for `product_id`, or
    /// [`OrdersError::NotFound`] when no order references it.
    async fn get_order_by_product_id(&self, product_id: &ProductId) -> Result<Order, OrdersError>;

    /// Creates an order and returns its newly assigned id.
    async fn create_order(&self, line_items: Vec<LineItem>) -> Result<OrderId, OrdersError>;

    /// Returns one page of orders in creation order. `page` is 1-based.
    async fn list_orders(&self, page: u32, per_page: u32) -> Result<Vec<Order>, OrdersError>;

    /// Returns the number of orders in the ledger.
    async fn get_total_orders(&self) -> Result<u64, OrdersError>;
}
