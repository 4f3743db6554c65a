//! # Cart
//!
//! The shopper's bag as an owned store: every change is a [`CartCommand`] applied in order
//! by one task, and readers get [`CartSnapshot`]s and [`CartEvent`]s. A command's change to
//! the items and its notification are published together.
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//! use thrift_boutique::cart;
//! use thrift_boutique::model::Product;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, bag) = cart::new(Duration::from_secs(3));
//!     tokio::spawn(actor.run(()));
//!
//!     let blouse = Product::new("vintage-cream-blouse", "Vintage Cream Blouse", "Vintage Find", "M", "Gently Used", 1299);
//!     assert!(bag.add_to_cart(blouse.clone()).await?);
//!     assert!(!bag.add_to_cart(blouse).await?);
//!     assert_eq!(bag.items().len(), 1);
//!     Ok(())
//! }
//! ```

mod actions;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;
pub use state::*;

use crate::clients::CartClient;
use std::time::Duration;
use store_runtime::StoreActor;

/// How long an "added to bag" notification stays up.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Creates a new cart store and its client.
pub fn new(notification_ttl: Duration) -> (StoreActor<CartState>, CartClient) {
    let (actor, generic_client) = StoreActor::new(CartState::new(notification_ttl), 32);
    (actor, CartClient::new(generic_client))
}
