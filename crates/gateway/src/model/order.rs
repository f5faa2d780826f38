/// Represents a customer order and its enriched, read-side projection.
///
/// # Record Store
/// [`Order`] implements the [`Record`](record_actor::Record) trait with a store-assigned
/// [`OrderId`]. See [`orders_actor`](crate::orders_actor).
use crate::model::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders. Assigned by the orders store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    /// Serialized as a decimal string, e.g. `"99.99"`.
    pub price: Decimal,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(product_id: impl Into<ProductId>, price: Decimal, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            price,
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_details: Vec<LineItem>,
}

impl Order {
    /// True if any line item refers to `product_id`.
    pub fn references(&self, product_id: &ProductId) -> bool {
        self.order_details
            .iter()
            .any(|item| &item.product_id == product_id)
    }
}

/// Validated body of `POST /orders`.
///
/// An empty `order_details` list is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderRequest {
    pub order_details: Vec<LineItem>,
}

/// A line item joined with its catalog record and image location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedLineItem {
    pub product_id: ProductId,
    pub price: Decimal,
    pub quantity: u32,
    pub product: Product,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedOrder {
    pub id: OrderId,
    pub order_details: Vec<EnrichedLineItem>,
}

/// One page of enriched orders plus the ledger-wide total.
///
/// `total` comes from a separate count request and is not derived from `orders`; the two
/// are not read from one snapshot, so concurrent writes can make them disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedOrders {
    pub orders: Vec<EnrichedOrder>,
    pub total: u64,
}
