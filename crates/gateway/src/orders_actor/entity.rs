//! Record trait implementation for the Order domain type.
//!
//! Orders are numbered by the store; the draft is the list of line items.

use super::error::OrdersError;
use crate::model::{LineItem, Order, OrderId};
use record_actor::Record;

impl Record for Order {
    type Key = OrderId;
    type Draft = Vec<LineItem>;
    type Error = OrdersError;

    fn assign_key(sequence: u64, _draft: &Vec<LineItem>) -> OrderId {
        OrderId(sequence)
    }

    /// Rejects line items with a zero quantity.
    fn from_draft(id: OrderId, order_details: Vec<LineItem>) -> Result<Self, OrdersError> {
        if let Some(item) = order_details.iter().find(|item| item.quantity == 0) {
            return Err(OrdersError::InvalidRecord(format!(
                "line item for product {} has zero quantity",
                item.product_id
            )));
        }
        Ok(Self { id, order_details })
    }
}
