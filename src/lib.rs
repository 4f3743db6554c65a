//! # Thrift by Musk Storefront
//!
//! Catalog, cart and drop logic for a secondhand-clothing boutique.
//!
//! - **[catalog]**: the filter engine. Pure functions that gate the catalog by the release,
//!   derive facets and apply the shopper's filters.
//! - **[release_gate]**: the drop countdown, a store that polls until launch and then latches.
//! - **[cart]**: the bag, a store with copy-on-add items and auto-clearing notifications.
//! - **[checkout]**: order summary, rupee formatting and the WhatsApp deep link.
//! - **[clients]**: type-safe wrappers over the generic store clients.
//! - **[lifecycle]**: [`Storefront`](lifecycle::Storefront) starts and stops the stores.
//!
//! Stores run on [`store_runtime`]; see [`store_runtime::mock`] for testing clients
//! without spawning a store.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod cli;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod media;
pub mod model;
pub mod release_gate;
