//! # Release Gate
//!
//! Pieces marked `isUpcoming` belong to the next drop and stay hidden until a configured
//! launch instant. The gate answers one question, "is the drop live?", and once the answer
//! is yes it stays yes for the rest of the session.
//!
//! ## Structure
//!
//! - [`is_live`] - the pure comparison
//! - [`clock`] - [`Clock`] sources: the wall clock and a pinned clock for previews and tests
//! - [`countdown`] - [`Countdown`] shown on the banner until launch
//! - [`state`] - [`GateState`], the store that polls until launch and then stops
//! - [`new()`] - factory that creates the store and its client
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use thrift_boutique::release_gate::{self, LaunchSchedule, SystemClock};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let schedule = LaunchSchedule::parse("2025-07-25T12:00:00.000Z")?;
//!     let (actor, gate) = release_gate::new(schedule, Arc::new(SystemClock), Duration::from_secs(1));
//!     tokio::spawn(actor.run(()));
//!
//!     // Long past: the gate starts live and never polls.
//!     assert!(gate.is_live());
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod countdown;
pub mod error;
pub mod state;

pub use clock::*;
pub use countdown::*;
pub use error::*;
pub use state::*;

use crate::clients::ReleaseGateClient;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use store_runtime::StoreActor;

/// True once `now` has reached `launch`.
pub fn is_live(launch: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now >= launch
}

/// When the next drop opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchSchedule {
    pub launch: DateTime<Utc>,
}

impl LaunchSchedule {
    pub fn new(launch: DateTime<Utc>) -> Self {
        Self { launch }
    }

    /// Parses an RFC 3339 timestamp such as `2025-07-25T12:00:00.000Z`.
    pub fn parse(value: &str) -> Result<Self, GateError> {
        DateTime::parse_from_rfc3339(value)
            .map(|at| Self::new(at.with_timezone(&Utc)))
            .map_err(|e| GateError::InvalidLaunchDate {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn countdown(&self, now: DateTime<Utc>) -> Countdown {
        Countdown::until(self.launch, now)
    }
}

/// Creates a new gate store and its client.
pub fn new(
    schedule: LaunchSchedule,
    clock: Arc<dyn Clock>,
    poll_interval: Duration,
) -> (StoreActor<GateState>, ReleaseGateClient) {
    let state = GateState::new(schedule, clock.clone(), poll_interval);
    let (actor, generic_client) = StoreActor::new(state, 8);
    (actor, ReleaseGateClient::new(generic_client, clock))
}
