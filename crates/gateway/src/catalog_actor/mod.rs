//! # Catalog Actor
//!
//! The product catalog backend, run as an in-memory [`RecordActor`].
//!
//! ## Structure
//!
//! - [`entity`] - [`Record`](record_actor::Record) implementation for [`Product`]
//! - [`error`] - [`CatalogError`] reported to callers of the catalog
//! - [`new()`] - Factory function that creates the actor and its typed client
//!
//! ## Usage
//!
//! ```rust
//! use gateway::backend::CatalogBackend;
//! use gateway::catalog_actor;
//! use gateway::model::Product;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = catalog_actor::new();
//!     tokio::spawn(actor.run());
//!
//!     let id = client
//!         .create(Product::new("the_enigma", "The Enigma", 200, 8.5, 3))
//!         .await?;
//!     let product = client.get(&id).await?;
//!     assert_eq!(product.title, "The Enigma");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CatalogClient;
use crate::model::Product;
use record_actor::RecordActor;

/// Mailbox capacity of the catalog actor.
pub const MAILBOX_SIZE: usize = 32;

/// Creates a new Catalog actor and its client.
pub fn new() -> (RecordActor<Product>, CatalogClient) {
    let (actor, store) = RecordActor::new(MAILBOX_SIZE);
    (actor, CatalogClient::new(store))
}
