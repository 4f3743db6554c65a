//! # Generic Messages
//!
//! This module defines the message types exchanged between a `StoreClient` and its
//! `StoreActor`.

use crate::error::FrameworkError;
use crate::state::StoreState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by stores.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// Reads do not travel through the channel: the last published snapshot is always available
/// on the client's watch receiver. The channel carries writes, plus `Settled` for callers that
/// need read-your-writes ordering.
#[derive(Debug)]
pub enum StoreRequest<S: StoreState> {
    /// Apply a command and reply with the store's answer.
    Dispatch {
        command: S::Command,
        respond_to: Response<S::Reply>,
    },
    /// Reply with the snapshot as of this point in the queue.
    Settled { respond_to: Response<S::Snapshot> },
}
