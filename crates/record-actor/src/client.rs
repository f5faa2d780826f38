//! # Store Client
//!
//! The generic handle for talking to a [`RecordActor`](crate::RecordActor).

use crate::entity::Record;
use crate::error::StoreError;
use crate::message::{Filter, StoreRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `RecordActor`.
///
/// Holds only the sender half of the actor's mailbox, so cloning is cheap and clones can
/// be shared freely across request handlers. The actor stops once every clone is dropped.
pub struct StoreClient<T: Record> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

// Manual impl: `T` itself does not need to be `Clone` for the handle to be.
impl<T: Record> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Record> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn insert(&self, draft: T::Draft) -> Result<T::Key, StoreError> {
        self.request(|respond_to| StoreRequest::Insert { draft, respond_to })
            .await
    }

    pub async fn get(&self, key: T::Key) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Get { key, respond_to })
            .await
    }

    pub async fn delete(&self, key: T::Key) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::Delete { key, respond_to })
            .await
    }

    pub async fn page(&self, page: u32, per_page: u32) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Page {
            page,
            per_page,
            respond_to,
        })
        .await
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        self.request(|respond_to| StoreRequest::Count { respond_to })
            .await
    }

    pub async fn find<F>(&self, filter: F) -> Result<Option<T>, StoreError>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let filter: Filter<T> = Box::new(filter);
        self.request(|respond_to| StoreRequest::Find { filter, respond_to })
            .await
    }
}
