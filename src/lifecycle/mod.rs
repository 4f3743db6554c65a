//! # Storefront Lifecycle
//!
//! Starts the stores a session needs and stops them together.
//!
//! ## Startup
//!
//! [`Storefront::start`] validates the config, then:
//! 1. Creates the release gate store and evaluates it against the clock once.
//! 2. Creates the cart store.
//! 3. Spawns both run loops on the current Tokio runtime.
//!
//! Neither store depends on the other, so both run with a `()` context.
//!
//! ## Shutdown
//!
//! 1. **Drop all clients** - closes the request channels
//! 2. **Stores detect closure** - the run loop's `recv()` returns `None`
//! 3. **Timers go with them** - a pending gate poll or notification expiry lives inside the
//!    loop, so it is cancelled when the loop ends
//! 4. **Await completion** - a panicked store surfaces as [`StorefrontError::TaskFailed`]
//!
//! A client clone held elsewhere keeps its store alive; `shutdown` then waits for it to
//! be dropped.

pub mod storefront;

pub use storefront::*;
