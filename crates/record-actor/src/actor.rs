//! # Record Actor
//!
//! This module defines the `RecordActor`, the server half of a record store. It owns the
//! records and the receiving end of the mailbox, and processes messages one at a time.

use crate::client::StoreClient;
use crate::entity::Record;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of records.
///
/// Records are kept in insertion order: `records` is keyed by the sequence number a record
/// was added under, and `index` maps each record key to that sequence number. Paging and
/// `Find` walk `records` in order, so results are stable between calls.
///
/// Because the actor processes its mailbox sequentially, neither map needs a lock.
///
/// # Usage Pattern
///
/// 1.  **Create**: `RecordActor::new()` returns the actor and its client.
/// 2.  **Run**: spawn `actor.run()` on the Tokio runtime.
/// 3.  **Use**: clone the client into whatever needs it.
///
/// ```rust
/// use record_actor::{Record, RecordActor};
///
/// #[derive(Clone, Debug)] struct Tag { name: String }
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// impl Record for Tag {
///     type Key = String;
///     type Draft = String;
///     type Error = TagError;
///     fn assign_key(_: u64, name: &String) -> String { name.clone() }
///     fn from_draft(_: String, name: String) -> Result<Self, TagError> { Ok(Self { name }) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = RecordActor::<Tag>::new(10);
///     tokio::spawn(actor.run());
///     let key = client.insert("rust".to_string()).await.unwrap();
///     assert_eq!(key, "rust");
/// }
/// ```
pub struct RecordActor<T: Record> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: BTreeMap<u64, T>,
    index: HashMap<T::Key, u64>,
    next_sequence: u64,
}

impl<T: Record> RecordActor<T> {
    /// Creates a new `RecordActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the mailbox capacity; when it is full, client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: BTreeMap::new(),
            index: HashMap::new(),
            next_sequence: 1,
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g. "Product" instead of "gateway::model::product::Product")
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert { draft, respond_to } => {
                    debug!(record_type, ?draft, "Insert");
                    let _ = respond_to.send(self.insert(record_type, draft));
                }
                StoreRequest::Get { key, respond_to } => {
                    let record = self
                        .index
                        .get(&key)
                        .and_then(|sequence| self.records.get(sequence))
                        .cloned();
                    debug!(record_type, %key, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Delete { key, respond_to } => {
                    debug!(record_type, %key, "Delete");
                    match self.index.remove(&key) {
                        Some(sequence) => {
                            self.records.remove(&sequence);
                            info!(record_type, %key, size = self.records.len(), "Deleted");
                            let _ = respond_to.send(Ok(()));
                        }
                        None => {
                            warn!(record_type, %key, "Not found");
                            let _ = respond_to.send(Err(StoreError::NotFound(key.to_string())));
                        }
                    }
                }
                StoreRequest::Page {
                    page,
                    per_page,
                    respond_to,
                } => {
                    let skip = (page.saturating_sub(1) as usize).saturating_mul(per_page as usize);
                    let records: Vec<T> = self
                        .records
                        .values()
                        .skip(skip)
                        .take(per_page as usize)
                        .cloned()
                        .collect();
                    debug!(record_type, page, per_page, returned = records.len(), "Page");
                    let _ = respond_to.send(Ok(records));
                }
                StoreRequest::Count { respond_to } => {
                    let size = self.records.len() as u64;
                    debug!(record_type, size, "Count");
                    let _ = respond_to.send(Ok(size));
                }
                StoreRequest::Find { filter, respond_to } => {
                    let record = self.records.values().find(|record| filter(record)).cloned();
                    debug!(record_type, found = record.is_some(), "Find");
                    let _ = respond_to.send(Ok(record));
                }
            }
        }

        info!(record_type, size = self.records.len(), "Shutdown");
    }

    fn insert(&mut self, record_type: &str, draft: T::Draft) -> Result<T::Key, StoreError> {
        let sequence = self.next_sequence;
        let key = T::assign_key(sequence, &draft);

        let record = T::from_draft(key.clone(), draft).map_err(|e| {
            warn!(record_type, %key, error = %e, "Insert rejected");
            StoreError::RecordError(Box::new(e))
        })?;

        match self.index.get(&key) {
            Some(existing) => {
                self.records.insert(*existing, record);
                info!(record_type, %key, "Replaced");
            }
            None => {
                self.next_sequence += 1;
                self.index.insert(key.clone(), sequence);
                self.records.insert(sequence, record);
                info!(record_type, %key, size = self.records.len(), "Inserted");
            }
        }
        Ok(key)
    }
}
