//! # Record Actor
//!
//! This crate provides an in-memory record store that runs as an actor on Tokio. Each
//! store owns a single collection of records and processes requests **sequentially** in
//! its own task, so the collection needs no locks. Callers talk to it through a cheap,
//! cloneable [`StoreClient`].
//!
//! It is the building block behind the backend services a gateway composes: a catalog
//! of products keyed by caller-supplied ids, and an order ledger keyed by store-assigned
//! sequence numbers.
//!
//! ## Architecture Overview
//!
//! 1. **Record Layer** ([`Record`]) - What is stored and how keys are assigned
//! 2. **Runtime Layer** ([`RecordActor`]) - Message processing and the store itself
//! 3. **Interface Layer** ([`StoreClient`], [`BackendClient`]) - Type-safe communication
//!
//! ## Requests
//!
//! | Request  | Reply                | Notes                                          |
//! |----------|----------------------|------------------------------------------------|
//! | `Insert` | key                  | replaces an existing record with the same key  |
//! | `Get`    | `Option<record>`     |                                                |
//! | `Delete` | `()`                 | [`StoreError::NotFound`] when absent           |
//! | `Page`   | `Vec<record>`        | 1-based page over insertion order              |
//! | `Count`  | `u64`                |                                                |
//! | `Find`   | `Option<record>`     | first record in insertion order matching       |
//!
//! ## Example
//!
//! ```rust
//! use record_actor::{Record, RecordActor};
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: u64, text: String }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("note error")]
//! struct NoteError;
//!
//! impl Record for Note {
//!     type Key = u64;
//!     type Draft = String;
//!     type Error = NoteError;
//!
//!     fn assign_key(sequence: u64, _draft: &String) -> u64 { sequence }
//!     fn from_draft(id: u64, text: String) -> Result<Self, NoteError> { Ok(Self { id, text }) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = RecordActor::<Note>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let id = client.insert("hello".to_string()).await.unwrap();
//!     let note = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(note.text, "hello");
//!     assert_eq!(client.count().await.unwrap(), 1);
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockStore`](mock::MockStore), which answers requests
//! from a script of expectations instead of a real store. It lets tests assert exactly
//! which requests a piece of orchestration logic sends, and that it sends nothing else.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::RecordActor;
pub use client::StoreClient;
pub use client_trait::BackendClient;
pub use entity::Record;
pub use error::StoreError;
pub use message::{Filter, Response, StoreRequest};
