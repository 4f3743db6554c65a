//! # Store Runtime
//!
//! Building blocks for single-owner, message-driven session stores on Tokio.
//!
//! A *store* is a small piece of mutable application state (a shopping bag, a launch gate)
//! owned by exactly one task. Everything else talks to it through a cloneable client:
//! commands go in over a channel, and every change comes back out as a published snapshot
//! plus a stream of events.
//!
//! ## Layers
//!
//! 1. **State Layer** ([`StoreState`]) - the business logic: commands, replies, events
//! 2. **Runtime Layer** ([`StoreActor`]) - message processing, timers and publication
//! 3. **Interface Layer** ([`StoreClient`], [`StoreHandle`]) - type-safe communication
//!
//! ## Guarantees
//!
//! - **Sequential**: one request at a time per store, no locks around state
//! - **Atomic publication**: a command's snapshot and its events are published together,
//!   after the handler succeeds; readers never observe half an update
//! - **Owned timers**: a store schedules future work by returning a deadline; moving the
//!   deadline cancels the old one, and dropping the last client stops the task and its timer
//!
//! ## Context Injection
//!
//! Dependencies are passed to [`StoreActor::run`], not to the constructor, so stores can be
//! created in any order and wired afterwards.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `StoreClient` from scripted expectations. See the
//! [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::StoreHandle;
pub use error::FrameworkError;
pub use message::{Response, StoreRequest};
pub use state::{Events, StoreState};
