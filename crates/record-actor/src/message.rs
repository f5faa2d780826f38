//! # Store Messages
//!
//! Request types sent from [`StoreClient`](crate::StoreClient) to
//! [`RecordActor`](crate::RecordActor). Every request carries a oneshot sender for its reply.

use crate::entity::Record;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by store actors.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Predicate evaluated inside the actor for [`StoreRequest::Find`].
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Internal message type sent to the actor to request operations.
///
/// The variants are generic over `T: Record`, so a product draft can never be sent to
/// an order store.
pub enum StoreRequest<T: Record> {
    Insert {
        draft: T::Draft,
        respond_to: Response<T::Key>,
    },
    Get {
        key: T::Key,
        respond_to: Response<Option<T>>,
    },
    Delete {
        key: T::Key,
        respond_to: Response<()>,
    },
    Page {
        page: u32,
        per_page: u32,
        respond_to: Response<Vec<T>>,
    },
    Count {
        respond_to: Response<u64>,
    },
    Find {
        filter: Filter<T>,
        respond_to: Response<Option<T>>,
    },
}

impl<T: Record> StoreRequest<T> {
    /// Short request name, used in logs and mock diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreRequest::Insert { .. } => "Insert",
            StoreRequest::Get { .. } => "Get",
            StoreRequest::Delete { .. } => "Delete",
            StoreRequest::Page { .. } => "Page",
            StoreRequest::Count { .. } => "Count",
            StoreRequest::Find { .. } => "Find",
        }
    }
}
