//! # Mock Store & Testing Guide
//!
//! `MockStore<T>` hands out a real [`StoreClient<T>`] whose requests are answered from a
//! script of expectations instead of a real store. It is meant for testing logic that sits
//! *around* a client: orchestration code, typed client wrappers, error mapping.
//!
//! ## When to use a MockStore vs a real actor
//!
//! | Feature | MockStore | RecordActor |
//! |---------|-----------|-------------|
//! | **State** | None (scripted replies) | Real records |
//! | **Error injection** | Easy (`return_err`) | Hard (needs specific state) |
//! | **"Never called" checks** | Built in (`verify`) | Not available |
//! | **Use case** | Orchestration and client logic | The store itself, full system |
//!
//! ## Behaviour
//!
//! - Expectations are consumed strictly in the order they were registered.
//! - A request whose kind or key does not match the next expectation is recorded as
//!   *unexpected* and its reply channel is dropped, so the caller sees
//!   [`StoreError::ActorDropped`].
//! - [`MockStore::verify`] panics if any expectation is left over or any request was
//!   unexpected. Call it at the end of every test.
//!
//! ```rust
//! use record_actor::mock::MockStore;
//! use record_actor::{Record, StoreError};
//!
//! #[derive(Clone, Debug, PartialEq)] struct Note { id: u64 }
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//!
//! impl Record for Note {
//!     type Key = u64; type Draft = (); type Error = NoteError;
//!     fn assign_key(sequence: u64, _: &()) -> u64 { sequence }
//!     fn from_draft(id: u64, _: ()) -> Result<Self, NoteError> { Ok(Self { id }) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Note>::new();
//!     mock.expect_get(1).return_ok(Some(Note { id: 1 }));
//!     mock.expect_count().return_err(StoreError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap(), Some(Note { id: 1 }));
//!     assert!(matches!(client.count().await, Err(StoreError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```

use crate::client::StoreClient;
use crate::entity::Record;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATIONS
// =============================================================================

/// A scripted reply for one expected request.
enum Expectation<T: Record> {
    Insert {
        response: Result<T::Key, StoreError>,
    },
    Get {
        key: T::Key,
        response: Result<Option<T>, StoreError>,
    },
    Delete {
        key: T::Key,
        response: Result<(), StoreError>,
    },
    Page {
        page: u32,
        per_page: u32,
        response: Result<Vec<T>, StoreError>,
    },
    Count {
        response: Result<u64, StoreError>,
    },
    Find {
        response: Result<Option<T>, StoreError>,
    },
}

impl<T: Record> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Expectation::Insert { .. } => "Insert".to_string(),
            Expectation::Get { key, .. } => format!("Get({key})"),
            Expectation::Delete { key, .. } => format!("Delete({key})"),
            Expectation::Page { page, per_page, .. } => format!("Page({page}, {per_page})"),
            Expectation::Count { .. } => "Count".to_string(),
            Expectation::Find { .. } => "Find".to_string(),
        }
    }
}

type Shared<V> = Arc<Mutex<V>>;

/// A mock store with expectation tracking for fluent testing.
///
/// Drafts passed to `Insert` are captured and can be inspected with
/// [`MockStore::inserted`].
pub struct MockStore<T: Record> {
    client: StoreClient<T>,
    expectations: Shared<VecDeque<Expectation<T>>>,
    unexpected: Shared<Vec<String>>,
    inserted: Shared<Vec<T::Draft>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockStore<T> {
    /// Creates a new mock store with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Shared<VecDeque<Expectation<T>>> = Arc::default();
        let unexpected: Shared<Vec<String>> = Arc::default();
        let inserted: Shared<Vec<T::Draft>> = Arc::default();

        let task_expectations = expectations.clone();
        let task_unexpected = unexpected.clone();
        let task_inserted = inserted.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = task_expectations.lock().unwrap().pop_front();
                answer(request, next, &task_inserted, &task_unexpected);
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            unexpected,
            inserted,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects an `insert` request.
    pub fn expect_insert(&mut self) -> ExpectationBuilder<T, T::Key> {
        self.builder(|response| Expectation::Insert { response })
    }

    /// Expects a `get` request for `key`.
    pub fn expect_get(&mut self, key: T::Key) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { key, response })
    }

    /// Expects a `delete` request for `key`.
    pub fn expect_delete(&mut self, key: T::Key) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { key, response })
    }

    /// Expects a `page` request with exactly these parameters.
    pub fn expect_page(&mut self, page: u32, per_page: u32) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(move |response| Expectation::Page {
            page,
            per_page,
            response,
        })
    }

    /// Expects a `count` request.
    pub fn expect_count(&mut self) -> ExpectationBuilder<T, u64> {
        self.builder(|response| Expectation::Count { response })
    }

    /// Expects a `find` request. The filter itself is not inspected.
    pub fn expect_find(&mut self) -> ExpectationBuilder<T, Option<T>> {
        self.builder(|response| Expectation::Find { response })
    }

    fn builder<V>(
        &mut self,
        make: impl FnOnce(Result<V, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, V> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            make: Box::new(make),
        }
    }

    /// Drafts received by `insert` requests that matched an expectation, in arrival order.
    pub fn inserted(&self) -> Vec<T::Draft>
    where
        T::Draft: Clone,
    {
        self.inserted.lock().unwrap().clone()
    }

    /// Descriptions of requests that did not match the script.
    pub fn unexpected_requests(&self) -> Vec<String> {
        self.unexpected.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met and nothing else was requested.
    pub fn verify(&self) {
        let unexpected = self.unexpected.lock().unwrap();
        if !unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", *unexpected);
        }
        let remaining: Vec<String> = self
            .expectations
            .lock()
            .unwrap()
            .iter()
            .map(Expectation::describe)
            .collect();
        if !remaining.is_empty() {
            panic!("Not all expectations were met. Remaining: {remaining:?}");
        }
    }
}

/// Replies to `request` from `expectation`, or records the mismatch.
///
/// A mismatch is recorded before the request (and its reply channel) is dropped, so the
/// caller never observes the failure ahead of `verify`.
fn answer<T: Record>(
    request: StoreRequest<T>,
    expectation: Option<Expectation<T>>,
    inserted: &Shared<Vec<T::Draft>>,
    unexpected: &Shared<Vec<String>>,
) {
    match (request, expectation) {
        (StoreRequest::Insert { draft, respond_to }, Some(Expectation::Insert { response })) => {
            inserted.lock().unwrap().push(draft);
            let _ = respond_to.send(response);
        }
        (StoreRequest::Get { key, respond_to }, Some(Expectation::Get { key: want, response }))
            if key == want =>
        {
            let _ = respond_to.send(response);
        }
        (
            StoreRequest::Delete { key, respond_to },
            Some(Expectation::Delete { key: want, response }),
        ) if key == want => {
            let _ = respond_to.send(response);
        }
        (
            StoreRequest::Page {
                page,
                per_page,
                respond_to,
            },
            Some(Expectation::Page {
                page: want_page,
                per_page: want_per_page,
                response,
            }),
        ) if page == want_page && per_page == want_per_page => {
            let _ = respond_to.send(response);
        }
        (StoreRequest::Count { respond_to }, Some(Expectation::Count { response })) => {
            let _ = respond_to.send(response);
        }
        (StoreRequest::Find { respond_to, .. }, Some(Expectation::Find { response })) => {
            let _ = respond_to.send(response);
        }
        (request, expectation) => {
            let got = describe_request(&request);
            let wanted = expectation.map_or_else(|| "nothing".to_string(), |e| e.describe());
            unexpected
                .lock()
                .unwrap()
                .push(format!("got {got}, expected {wanted}"));
        }
    }
}

fn describe_request<T: Record>(request: &StoreRequest<T>) -> String {
    match request {
        StoreRequest::Get { key, .. } | StoreRequest::Delete { key, .. } => {
            format!("{}({key})", request.kind())
        }
        StoreRequest::Page { page, per_page, .. } => format!("Page({page}, {per_page})"),
        other => other.kind().to_string(),
    }
}

/// Builder that completes one expectation with its reply.
pub struct ExpectationBuilder<T: Record, V> {
    expectations: Shared<VecDeque<Expectation<T>>>,
    make: Box<dyn FnOnce(Result<V, StoreError>) -> Expectation<T> + Send>,
}

impl<T: Record, V> ExpectationBuilder<T, V> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: V) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<V, StoreError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}
