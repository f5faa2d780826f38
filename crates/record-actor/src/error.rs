//! # Store Errors
//!
//! Errors raised by the store runtime itself. Record-specific failures are boxed into
//! [`StoreError::RecordError`] so typed clients can map them onto their own error enums.

/// Errors that can occur within a record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Record error: {0}")]
    RecordError(Box<dyn std::error::Error + Send + Sync>),
}
