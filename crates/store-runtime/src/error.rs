//! # Framework Errors
//!
//! Common error types shared by every store and client.

/// Errors that can occur within the store runtime itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The store task has stopped; the client outlived its store.
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("State error: {0}")]
    StateError(Box<dyn std::error::Error + Send + Sync>),
}
