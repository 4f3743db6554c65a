//! # StoreHandle Trait
//!
//! Common interface for store-specific clients, adding default `snapshot` and `settled`
//! methods built on top of a generic `StoreClient`.
use crate::{FrameworkError, StoreClient, StoreState};
use async_trait::async_trait;
use tokio::sync::broadcast;

/// Trait for store-specific clients to inherit the generic read operations.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use store_runtime::{Events, FrameworkError, StoreClient, StoreHandle, StoreState};
///
/// #[derive(Debug)] struct Toggle(bool);
/// #[derive(Debug, thiserror::Error)] #[error("toggle: {0}")] struct ToggleError(String);
///
/// #[async_trait]
/// impl StoreState for Toggle {
///     type Command = (); type Reply = bool; type Event = bool; type Snapshot = bool;
///     type Context = (); type Error = ToggleError;
///     async fn handle(&mut self, _: (), _: &(), events: &mut Events<bool>) -> Result<bool, ToggleError> {
///         self.0 = !self.0;
///         events.emit(self.0);
///         Ok(self.0)
///     }
///     fn snapshot(&self) -> bool { self.0 }
/// }
///
/// struct ToggleClient { inner: StoreClient<Toggle> }
///
/// #[async_trait]
/// impl StoreHandle<Toggle> for ToggleClient {
///     type Error = ToggleError;
///     fn inner(&self) -> &StoreClient<Toggle> { &self.inner }
///     fn map_error(e: FrameworkError) -> ToggleError { ToggleError(e.to_string()) }
/// }
///
/// async fn usage(client: ToggleClient) {
///     // snapshot() and settled() are provided automatically
///     let _now: bool = client.snapshot();
///     let _after_queue = client.settled().await;
/// }
/// ```
#[async_trait]
pub trait StoreHandle<S: StoreState>: Send + Sync {
    /// The store-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<S>;

    /// Map framework errors to the store-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// The most recently published snapshot.
    fn snapshot(&self) -> S::Snapshot {
        self.inner().snapshot()
    }

    /// Subscribes to the store's events.
    fn subscribe(&self) -> broadcast::Receiver<S::Event> {
        self.inner().subscribe()
    }

    /// The snapshot after every previously sent command has been applied.
    #[tracing::instrument(skip(self))]
    async fn settled(&self) -> Result<S::Snapshot, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().settled().await.map_err(Self::map_error)
    }
}
