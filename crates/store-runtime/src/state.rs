//! # StoreState Trait
//!
//! The `StoreState` trait is the contract every store (cart, release gate, …) implements to be
//! driven by the generic [`StoreActor`](crate::StoreActor). It names the commands the store
//! accepts, the replies it returns, the events it emits and the snapshot it publishes, and it
//! provides lifecycle hooks (`on_start`, `on_deadline`, `on_stop`).
//!
//! # Architecture Note
//! A store owns a small piece of mutable session state. Consumers never touch that state
//! directly: they send commands and read published snapshots. Writing the message loop once
//! in [`StoreActor`](crate::StoreActor) keeps every store's business logic a plain
//! `&mut self` method.
//!
//! # Scheduling
//! A store that needs to act later (auto-dismiss a toast, poll a clock) does not spawn its own
//! timers. It reports the next instant it wants to be woken through [`StoreState::deadline`].
//! The actor re-reads the deadline after every request, so changing it inside a handler
//! cancels the old timer and schedules the new one in a single step.

use async_trait::async_trait;
use std::fmt::Debug;
use tokio::time::Instant;

/// Buffer of events produced while handling one command.
///
/// Events are only published once the handler returns `Ok`, together with the new snapshot.
#[derive(Debug)]
pub struct Events<E> {
    pending: Vec<E>,
}

impl<E> Default for Events<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Events<E> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Queues an event for publication.
    pub fn emit(&mut self, event: E) {
        self.pending.push(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Events queued so far, oldest first.
    pub fn pending(&self) -> &[E] {
        &self.pending
    }

    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, E> {
        self.pending.drain(..)
    }

    pub(crate) fn discard(&mut self) {
        self.pending.clear();
    }
}

/// Trait that any session store must implement to be driven by a `StoreActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks may await other stores. The `Context` type is
/// injected into every hook at `run()` time rather than at construction time, which keeps
/// wiring order free ("late binding").
#[async_trait]
pub trait StoreState: Send + 'static {
    /// Requests the store understands (e.g. `Add(product)`).
    type Command: Send + Debug;

    /// Result returned to the caller of a command.
    type Reply: Send + Debug;

    /// Change notifications broadcast to subscribers.
    type Event: Clone + Send + Debug + 'static;

    /// Read-only view published after every change.
    type Snapshot: Clone + Send + Sync + Debug + 'static;

    /// The runtime context (dependencies) injected into the store.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this store.
    ///
    /// # Design Note: Error Granularity
    ///
    /// One error enum per store rather than one per command. Callers match a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once before the first request is processed.
    async fn on_start(
        &mut self,
        _ctx: &Self::Context,
        _events: &mut Events<Self::Event>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies a command.
    async fn handle(
        &mut self,
        command: Self::Command,
        ctx: &Self::Context,
        events: &mut Events<Self::Event>,
    ) -> Result<Self::Reply, Self::Error>;

    /// Builds the view published to readers.
    fn snapshot(&self) -> Self::Snapshot;

    /// The next instant this store wants to be woken, if any.
    fn deadline(&self) -> Option<Instant> {
        None
    }

    /// Called when the instant returned by [`StoreState::deadline`] has passed.
    async fn on_deadline(
        &mut self,
        _ctx: &Self::Context,
        _events: &mut Events<Self::Event>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after the last client is dropped, before the task exits.
    async fn on_stop(&mut self, _ctx: &Self::Context) {}
}
