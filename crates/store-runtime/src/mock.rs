//! # Mock Clients
//!
//! `MockClient<S>` hands out a real `StoreClient<S>` whose requests are answered from a queue
//! of scripted replies instead of a running store. Use it to test client wrappers, such as
//! reply unpacking and error mapping, without a state machine behind them.
//!
//! ## Mock or real store?
//!
//! | | MockClient | Real store |
//! |---|---|---|
//! | Replies | Scripted | Computed by `handle` |
//! | Snapshot | Whatever you publish | Follows every command |
//! | Timers | None | `deadline` / `on_deadline` |
//! | Failures | `return_err(..)` | Only if the state can fail |
//!
//! Test the state machine itself against a real `StoreActor`, ideally with
//! `#[tokio::test(start_paused = true)]` when deadlines are involved.
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use store_runtime::mock::MockClient;
//! use store_runtime::{Events, StoreState};
//!
//! #[derive(Debug)] struct Bag(Vec<String>);
//! #[derive(Debug, thiserror::Error)] #[error("bag")] struct BagError;
//!
//! #[async_trait]
//! impl StoreState for Bag {
//!     type Command = String; type Reply = bool; type Event = String;
//!     type Snapshot = Vec<String>; type Context = (); type Error = BagError;
//!     async fn handle(&mut self, item: String, _: &(), _: &mut Events<String>) -> Result<bool, BagError> {
//!         self.0.push(item);
//!         Ok(true)
//!     }
//!     fn snapshot(&self) -> Vec<String> { self.0.clone() }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Bag>::new(Vec::new());
//!     mock.expect_dispatch().return_ok(true);
//!
//!     let client = mock.client();
//!     assert!(client.dispatch("scarf".to_string()).await.unwrap());
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and the raw request receiver, or the fluent
//! [`MockClient`] API.

use crate::client::StoreClient;
use crate::error::FrameworkError;
use crate::message::{Response, StoreRequest};
use crate::state::StoreState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{broadcast, mpsc, watch};

/// One scripted reply, consumed in order.
enum Expectation<S: StoreState> {
    Dispatch {
        response: Result<S::Reply, FrameworkError>,
    },
    Settled {
        response: Result<S::Snapshot, FrameworkError>,
    },
}

type Queue<S> = Arc<Mutex<VecDeque<Expectation<S>>>>;

/// A client backed by scripted replies.
pub struct MockClient<S: StoreState> {
    client: StoreClient<S>,
    snapshots: watch::Sender<S::Snapshot>,
    events: broadcast::Sender<S::Event>,
    expectations: Queue<S>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: StoreState> MockClient<S> {
    /// Creates a new mock client with no expectations, publishing `initial` as its snapshot.
    pub fn new(initial: S::Snapshot) -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<S>>(100);
        let (snapshots, snapshot_rx) = watch::channel(initial);
        let (events, _) = broadcast::channel(16);
        let expectations: Queue<S> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to answer requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("mock expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Dispatch { respond_to, .. },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Settled { respond_to },
                        Some(Expectation::Settled { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender, snapshot_rx, events.clone()),
            snapshots,
            events,
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<S> {
        self.client.clone()
    }

    /// Replaces the published snapshot, as if the store had changed.
    pub fn publish_snapshot(&self, snapshot: S::Snapshot) {
        self.snapshots.send_replace(snapshot);
    }

    /// Sends an event to current subscribers.
    pub fn publish_event(&self, event: S::Event) {
        let _ = self.events.send(event);
    }

    /// Expects a `dispatch` call.
    pub fn expect_dispatch(&mut self) -> DispatchExpectationBuilder<S> {
        DispatchExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `settled` call.
    pub fn expect_settled(&mut self) -> SettledExpectationBuilder<S> {
        SettledExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self
            .expectations
            .lock()
            .expect("mock expectation queue poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `dispatch` expectations.
pub struct DispatchExpectationBuilder<S: StoreState> {
    expectations: Queue<S>,
}

impl<S: StoreState> DispatchExpectationBuilder<S> {
    /// Sets the expectation to return a successful reply.
    pub fn return_ok(self, reply: S::Reply) {
        self.push(Ok(reply));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<S::Reply, FrameworkError>) {
        self.expectations
            .lock()
            .expect("mock expectation queue poisoned")
            .push_back(Expectation::Dispatch { response });
    }
}

/// Builder for `settled` expectations.
pub struct SettledExpectationBuilder<S: StoreState> {
    expectations: Queue<S>,
}

impl<S: StoreState> SettledExpectationBuilder<S> {
    /// Sets the expectation to return a snapshot.
    pub fn return_ok(self, snapshot: S::Snapshot) {
        self.push(Ok(snapshot));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<S::Snapshot, FrameworkError>) {
        self.expectations
            .lock()
            .expect("mock expectation queue poisoned")
            .push_back(Expectation::Settled { response });
    }
}

/// Creates a client and the receiver its requests arrive on.
///
/// # Testing Strategy
/// Instead of scripting replies up front, the test plays the store: it pulls requests off the
/// receiver, asserts on them, and answers through the enclosed `respond_to` sender.
pub fn create_mock_client<S: StoreState>(
    buffer_size: usize,
    initial: S::Snapshot,
) -> (StoreClient<S>, mpsc::Receiver<StoreRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_snapshots, snapshot_rx) = watch::channel(initial);
    let (events, _) = broadcast::channel(16);
    (StoreClient::new(sender, snapshot_rx, events), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<S: StoreState>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(S::Command, Response<S::Reply>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Settled request
pub async fn expect_settled<S: StoreState>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<Response<S::Snapshot>> {
    match receiver.recv().await {
        Some(StoreRequest::Settled { respond_to }) => Some(respond_to),
        _ => None,
    }
}
