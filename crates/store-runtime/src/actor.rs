//! # Generic Store Actor
//!
//! `StoreActor` is the "server" half of a store. It owns the state and the receiving end of
//! the request channel, processes requests one at a time, and publishes a fresh snapshot and
//! the handler's events after every successful change.

use crate::client::StoreClient;
use crate::error::FrameworkError;
use crate::message::StoreRequest;
use crate::state::{Events, StoreState};
use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, info, warn};

/// Capacity of the event feed. Slow subscribers observe `Lagged` rather than blocking the store.
const EVENT_CAPACITY: usize = 64;

/// What woke the run loop.
enum Wake<R> {
    Request(Option<R>),
    Deadline,
}

/// The generic actor that drives one [`StoreState`].
///
/// **Concurrency Model**:
/// Each store runs in its own Tokio task and handles requests sequentially, so the state
/// needs no `Mutex`. Readers get snapshots through a `watch` channel and never block the
/// store.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StoreActor::new(state, buffer)` returns the actor and a client.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop on the runtime.
///
/// ```rust
/// use async_trait::async_trait;
/// use store_runtime::{Events, StoreActor, StoreState};
///
/// #[derive(Debug)]
/// struct Counter(u32);
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("never")]
/// struct Never;
///
/// #[async_trait]
/// impl StoreState for Counter {
///     type Command = u32;
///     type Reply = u32;
///     type Event = u32;
///     type Snapshot = u32;
///     type Context = ();
///     type Error = Never;
///
///     async fn handle(&mut self, by: u32, _: &(), events: &mut Events<u32>) -> Result<u32, Never> {
///         self.0 += by;
///         events.emit(self.0);
///         Ok(self.0)
///     }
///
///     fn snapshot(&self) -> u32 { self.0 }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::new(Counter(0), 8);
///     tokio::spawn(actor.run(()));
///     assert_eq!(client.dispatch(2).await.unwrap(), 2);
///     assert_eq!(client.settled().await.unwrap(), 2);
/// }
/// ```
///
/// # Deadlines
///
/// Before waiting for the next request the loop asks the state for [`StoreState::deadline`].
/// When the deadline passes first, [`StoreState::on_deadline`] runs and its effects are
/// published exactly like a command's. Because the deadline is recomputed on every iteration,
/// a handler that moves or clears it has cancelled the previous timer.
pub struct StoreActor<S: StoreState> {
    state: S,
    receiver: mpsc::Receiver<StoreRequest<S>>,
    snapshots: watch::Sender<S::Snapshot>,
    events: broadcast::Sender<S::Event>,
}

impl<S: StoreState> StoreActor<S> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` bounds the request channel; callers wait when it is full.
    pub fn new(state: S, buffer_size: usize) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (snapshots, snapshot_rx) = watch::channel(state.snapshot());
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let client = StoreClient::new(sender, snapshot_rx, events.clone());
        let actor = Self {
            state,
            receiver,
            snapshots,
            events,
        };
        (actor, client)
    }

    /// Runs the store's event loop until every client has been dropped.
    pub async fn run(mut self, context: S::Context) {
        // "CartState" rather than "thrift_boutique::cart::state::CartState"
        let store = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(store, "Store started");

        let mut events = Events::new();
        match self.state.on_start(&context, &mut events).await {
            Ok(()) => self.publish(&mut events),
            Err(e) => {
                warn!(store, error = %e, "on_start failed");
                events.discard();
            }
        }

        loop {
            let wake = match self.state.deadline() {
                Some(at) => tokio::select! {
                    msg = self.receiver.recv() => Wake::Request(msg),
                    _ = tokio::time::sleep_until(at) => Wake::Deadline,
                },
                None => Wake::Request(self.receiver.recv().await),
            };

            let next = match wake {
                Wake::Deadline => {
                    debug!(store, "Deadline reached");
                    match self.state.on_deadline(&context, &mut events).await {
                        Ok(()) => self.publish(&mut events),
                        Err(e) => {
                            warn!(store, error = %e, "on_deadline failed");
                            events.discard();
                        }
                    }
                    continue;
                }
                Wake::Request(msg) => msg,
            };

            let Some(msg) = next else { break };

            match msg {
                StoreRequest::Dispatch {
                    command,
                    respond_to,
                } => {
                    debug!(store, ?command, "Dispatch");
                    match self.state.handle(command, &context, &mut events).await {
                        Ok(reply) => {
                            let emitted = events.len();
                            self.publish(&mut events);
                            debug!(store, ?reply, emitted, "Applied");
                            let _ = respond_to.send(Ok(reply));
                        }
                        Err(e) => {
                            warn!(store, error = %e, "Command failed");
                            events.discard();
                            let error = FrameworkError::StateError(Box::new(e));
                            let _ = respond_to.send(Err(error));
                        }
                    }
                }
                StoreRequest::Settled { respond_to } => {
                    debug!(store, "Settled");
                    let _ = respond_to.send(Ok(self.state.snapshot()));
                }
            }
        }

        self.state.on_stop(&context).await;
        info!(store, "Shutdown");
    }

    /// Publishes the snapshot first, then the events, so a subscriber reacting to an event
    /// always reads a snapshot that already contains it.
    fn publish(&mut self, events: &mut Events<S::Event>) {
        self.snapshots.send_replace(self.state.snapshot());
        for event in events.drain() {
            // No subscribers is not an error.
            let _ = self.events.send(event);
        }
    }
}
