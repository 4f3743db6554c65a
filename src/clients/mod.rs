//! Type-safe wrappers around [`StoreClient`](store_runtime::StoreClient).

pub mod cart_client;
pub mod gate_client;

pub use cart_client::*;
pub use gate_client::*;
