//! # Observability & Tracing
//!
//! [`setup_tracing`] initialises structured logging for every store in the process.
//!
//! ## Configuration
//!
//! The subscriber uses the compact formatter and hides module paths (`with_target(false)`):
//! stores already tag their lines with a `store` field, which is shorter and easier to filter.
//! Levels come from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: `Store started` / `Shutdown` at info
//! - **Requests**: every `Dispatch` with its command at debug, the reply and event count
//!   once applied
//! - **Timers**: `Deadline reached` at debug
//! - **Failures**: rejected commands at warn, with the error
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle only
//! RUST_LOG=info cargo run -- shop
//!
//! # Every command and reply
//! RUST_LOG=debug cargo run -- checkout chic-denim-jacket
//!
//! # Just the runtime
//! RUST_LOG=store_runtime=debug cargo run -- countdown
//! ```
//!
//! With `RUST_LOG=debug` a checkout looks like:
//!
//! ```text
//! INFO Store started store="GateState"
//! INFO Store started store="CartState"
//! DEBUG add_to_cart: Dispatch store="CartState" command=Add(Product { id: ProductId("chic-denim-jacket"), .. })
//! DEBUG add_to_cart: Applied store="CartState" reply=Added(true) emitted=2
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Like [`setup_tracing`], but tolerates a subscriber that is already installed.
///
/// Useful in tests where several cases share one process.
pub fn try_setup_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_test_writer()
        .try_init()
        .is_ok()
}
