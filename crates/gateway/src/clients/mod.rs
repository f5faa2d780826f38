//! Typed wrappers around [`StoreClient`](record_actor::StoreClient) that implement the
//! [backend interfaces](crate::backend).

pub mod catalog_client;
pub mod orders_client;

pub use catalog_client::*;
pub use orders_client::*;
