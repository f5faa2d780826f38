//! # Orders Actor
//!
//! The order ledger backend, run as an in-memory [`RecordActor`]. Orders are immutable once
//! created; the ledger only supports creation, lookup, paging and counting.
//!
//! ## Structure
//!
//! - [`entity`] - [`Record`](record_actor::Record) implementation for [`Order`]
//! - [`error`] - [`OrdersError`] reported to callers of the ledger
//! - [`new()`] - Factory function that creates the actor and its typed client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrdersClient;
use crate::model::Order;
use record_actor::RecordActor;

/// Mailbox capacity of the orders actor.
pub const MAILBOX_SIZE: usize = 32;

/// Creates a new Orders actor and its client.
pub fn new() -> (RecordActor<Order>, OrdersClient) {
    let (actor, store) = RecordActor::new(MAILBOX_SIZE);
    (actor, OrdersClient::new(store))
}
