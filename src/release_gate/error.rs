//! Error types for the release gate.

use thiserror::Error;

/// Errors that can occur while reading or configuring the gate.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GateError {
    /// The launch instant is not an RFC 3339 timestamp.
    #[error("Invalid launch date {value:?}: {reason}")]
    InvalidLaunchDate { value: String, reason: String },

    /// An error occurred while communicating with the gate store.
    #[error("Gate store communication error: {0}")]
    StoreCommunicationError(String),
}
