//! # BackendClient Trait
//!
//! Common interface for record-specific clients. A typed client wraps a [`StoreClient`]
//! and supplies an error mapping; `fetch` and `remove` then come for free.
use crate::{Record, StoreClient, StoreError};
use async_trait::async_trait;

/// Trait for record-specific clients to inherit the standard lookups.
///
/// # Example
///
/// ```rust
/// use record_actor::{BackendClient, Record, StoreClient, StoreError};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u64 }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// impl Record for Note {
///     type Key = u64; type Draft = (); type Error = NoteError;
///     fn assign_key(sequence: u64, _: &()) -> u64 { sequence }
///     fn from_draft(id: u64, _: ()) -> Result<Self, NoteError> { Ok(Self { id }) }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct NotesError(String);
///
/// struct NotesClient { inner: StoreClient<Note> }
///
/// #[async_trait]
/// impl BackendClient<Note> for NotesClient {
///     type Error = NotesError;
///     fn inner(&self) -> &StoreClient<Note> { &self.inner }
///     fn map_error(e: StoreError) -> NotesError { NotesError(e.to_string()) }
/// }
///
/// async fn usage(client: NotesClient) {
///     // fetch() and remove() are provided automatically
///     let _ = client.fetch(1).await;
///     let _ = client.remove(1).await;
/// }
/// ```
#[async_trait]
pub trait BackendClient<T: Record>: Send + Sync {
    /// The record-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map store errors to the specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by key.
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, key: T::Key) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(key).await.map_err(Self::map_error)
    }

    /// Remove a record by key.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, key: T::Key) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(key).await.map_err(Self::map_error)
    }
}
