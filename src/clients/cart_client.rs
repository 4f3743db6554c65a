//! # Cart Client
//!
//! High-level API over a `StoreClient<CartState>`: one method per cart operation, returning
//! plain values instead of [`CartReply`] variants.

use crate::cart::{CartCommand, CartError, CartReply, CartState};
use crate::checkout;
use crate::model::{CartItem, Product, ProductId};
use async_trait::async_trait;
use store_runtime::{FrameworkError, StoreClient, StoreHandle};
use tracing::{debug, instrument};

/// Client for interacting with the cart store.
#[derive(Clone)]
pub struct CartClient {
    inner: StoreClient<CartState>,
}

impl CartClient {
    pub fn new(inner: StoreClient<CartState>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreHandle<CartState> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StoreClient<CartState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::from(e)
    }
}

impl CartClient {
    async fn send(&self, command: CartCommand) -> Result<CartReply, CartError> {
        self.inner.dispatch(command).await.map_err(Self::map_error)
    }

    /// Puts a copy of `product` in the bag.
    ///
    /// Returns `false` without changing anything if the product is sold or already in the bag.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn add_to_cart(&self, product: Product) -> Result<bool, CartError> {
        debug!("Sending request");
        match self.send(CartCommand::Add(product)).await? {
            CartReply::Added(added) => Ok(added),
            _ => unreachable!("Add must return Added"),
        }
    }

    /// Returns `false` if nothing with that id was in the bag.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, id: ProductId) -> Result<bool, CartError> {
        debug!("Sending request");
        match self.send(CartCommand::Remove(id)).await? {
            CartReply::Removed(removed) => Ok(removed),
            _ => unreachable!("Remove must return Removed"),
        }
    }

    /// Empties the bag, returning how many items were in it.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<usize, CartError> {
        debug!("Sending request");
        match self.send(CartCommand::Clear).await? {
            CartReply::Cleared(count) => Ok(count),
            _ => unreachable!("Clear must return Cleared"),
        }
    }

    /// Flips the bag panel, returning whether it is now open.
    #[instrument(skip(self))]
    pub async fn toggle_open(&self) -> Result<bool, CartError> {
        debug!("Sending request");
        match self.send(CartCommand::ToggleOpen).await? {
            CartReply::Toggled { open } => Ok(open),
            _ => unreachable!("ToggleOpen must return Toggled"),
        }
    }

    #[instrument(skip(self))]
    pub async fn dismiss_notification(&self) -> Result<bool, CartError> {
        debug!("Sending request");
        match self.send(CartCommand::DismissNotification).await? {
            CartReply::Dismissed(was_showing) => Ok(was_showing),
            _ => unreachable!("DismissNotification must return Dismissed"),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.snapshot().contains(id)
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.snapshot().items
    }

    /// The encoded order message for the current bag.
    pub fn checkout_message(&self, greeting: &str) -> String {
        checkout::checkout_message(greeting, &self.snapshot().items)
    }

    /// The WhatsApp link that sends the current bag to `phone`.
    pub fn checkout_link(&self, phone: &str, greeting: &str) -> String {
        checkout::checkout_link(phone, &self.checkout_message(greeting))
    }
}
