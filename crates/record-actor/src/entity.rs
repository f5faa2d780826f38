//! # Record Trait
//!
//! The `Record` trait is the contract a stored type implements to be managed by a
//! [`RecordActor`](crate::RecordActor). It names the key type, the creation payload
//! (`Draft`), and the error used when a draft is rejected.
//!
//! # Key Assignment
//! Stores differ in who chooses the key. An order ledger numbers its records itself; a
//! catalog stores products under ids chosen by the caller. [`Record::assign_key`] covers
//! both: it receives the next sequence number *and* the draft, and returns whichever key
//! applies.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored record must implement to be managed by `RecordActor`.
pub trait Record: Clone + Send + Sync + 'static {
    /// The unique key for this record (e.g. a product id, an order number).
    type Key: Eq + Hash + Clone + Send + Sync + Display + Debug + 'static;

    /// The data required to create a new record.
    type Draft: Send + Sync + Debug + 'static;

    /// Error returned when a draft cannot become a record.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Chooses the key for a new record.
    ///
    /// `sequence` starts at 1 and grows by one every time the store adds a new record.
    /// Replacing an existing key does not consume a sequence number.
    fn assign_key(sequence: u64, draft: &Self::Draft) -> Self::Key;

    /// Builds the full record from its key and draft.
    fn from_draft(key: Self::Key, draft: Self::Draft) -> Result<Self, Self::Error>;
}
