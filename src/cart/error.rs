//! Error types for the cart.

use store_runtime::FrameworkError;
use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Adding a sold or duplicate item is not an error; it is reported as not added.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The cart was used after the storefront shut down.
    #[error("Cart store is closed")]
    StoreClosed,

    /// An error occurred while communicating with the cart store.
    #[error("Cart store communication error: {0}")]
    StoreCommunicationError(String),
}

impl From<FrameworkError> for CartError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::StoreClosed => CartError::StoreClosed,
            other => CartError::StoreCommunicationError(other.to_string()),
        }
    }
}
