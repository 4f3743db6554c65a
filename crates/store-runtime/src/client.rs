//! # Generic Client
//!
//! This module defines the generic client for communicating with stores.

use crate::error::FrameworkError;
use crate::message::StoreRequest;
use crate::state::StoreState;
use tokio::sync::{broadcast, mpsc, oneshot, watch};

/// ## StoreClient
///
/// The `StoreClient<S>` is the consumer side of a `StoreActor<S>`. Commands travel over a
/// Tokio mpsc channel and replies come back on oneshot channels; snapshots are read from a
/// watch channel without a round trip. The client is cheap to clone and can be shared across
/// tasks. When the last clone is dropped the store shuts down.
pub struct StoreClient<S: StoreState> {
    sender: mpsc::Sender<StoreRequest<S>>,
    snapshots: watch::Receiver<S::Snapshot>,
    events: broadcast::Sender<S::Event>,
}

impl<S: StoreState> Clone for StoreClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            snapshots: self.snapshots.clone(),
            events: self.events.clone(),
        }
    }
}

impl<S: StoreState> StoreClient<S> {
    pub fn new(
        sender: mpsc::Sender<StoreRequest<S>>,
        snapshots: watch::Receiver<S::Snapshot>,
        events: broadcast::Sender<S::Event>,
    ) -> Self {
        Self {
            sender,
            snapshots,
            events,
        }
    }

    /// Sends a command and waits for the store's reply.
    pub async fn dispatch(&self, command: S::Command) -> Result<S::Reply, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)?
    }

    /// Waits until every request sent before this call has been applied, then returns the
    /// snapshot at that point.
    pub async fn settled(&self) -> Result<S::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Settled { respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)?
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> S::Snapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver that wakes on every published snapshot.
    pub fn changes(&self) -> watch::Receiver<S::Snapshot> {
        self.snapshots.clone()
    }

    /// Subscribes to events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<S::Event> {
        self.events.subscribe()
    }

    /// True once the store task has stopped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
