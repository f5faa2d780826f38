//! Error types for the orders service.

use thiserror::Error;

/// Errors reported by the orders backend.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrdersError {
    /// No order matched the lookup. Carries the id or product id that was looked up.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The ledger refused to store the order.
    #[error("Invalid order record: {0}")]
    InvalidRecord(String),

    /// The ledger could not be reached or dropped the request.
    #[error("Orders service unavailable: {0}")]
    Unavailable(String),
}
