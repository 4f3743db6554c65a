//! [`StoreState`] implementation for the cart.

use crate::cart::{CartCommand, CartError, CartEvent, CartReply};
use crate::checkout::Inr;
use crate::model::{CartItem, Product, ProductId};
use async_trait::async_trait;
use std::collections::HashSet;
use std::time::Duration;
use store_runtime::{Events, StoreState};
use tokio::time::Instant;
use tracing::debug;

/// Published view of the bag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSnapshot {
    /// In the order they were added.
    pub items: Vec<CartItem>,
    ids: HashSet<ProductId>,
    pub is_open: bool,
    /// Toast text, e.g. `Chic Denim Jacket added to bag!`.
    pub notification: Option<String>,
}

impl CartSnapshot {
    pub fn new(items: Vec<CartItem>, is_open: bool, notification: Option<String>) -> Self {
        let ids = items.iter().map(|item| item.id().clone()).collect();
        Self {
            items,
            ids,
            is_open,
            notification,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn total(&self) -> Inr {
        self.items.iter().map(|item| Inr(item.price())).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The shopper's bag for one session.
///
/// Each piece is unique stock, so there are no quantities: an item is either in the bag or
/// not. A notification is shown for every successful add and clears `notification_ttl`
/// after the most recent one.
#[derive(Debug)]
pub struct CartState {
    items: Vec<CartItem>,
    ids: HashSet<ProductId>,
    is_open: bool,
    notification: Option<String>,
    notification_expires: Option<Instant>,
    notification_ttl: Duration,
}

impl CartState {
    pub fn new(notification_ttl: Duration) -> Self {
        Self {
            items: Vec::new(),
            ids: HashSet::new(),
            is_open: false,
            notification: None,
            notification_expires: None,
            notification_ttl,
        }
    }

    fn add(&mut self, product: Product, events: &mut Events<CartEvent>) -> bool {
        if product.sold || self.ids.contains(&product.id) {
            debug!(id = %product.id, sold = product.sold, "Add ignored");
            return false;
        }

        let message = format!("{} added to bag!", product.name);
        self.ids.insert(product.id.clone());
        events.emit(CartEvent::ItemAdded {
            id: product.id.clone(),
            name: product.name.clone(),
        });
        self.items.push(CartItem::snapshot_of(&product));

        // Replaces any pending expiry.
        self.notification = Some(message.clone());
        self.notification_expires = Some(Instant::now() + self.notification_ttl);
        events.emit(CartEvent::NotificationShown { message });
        true
    }

    fn remove(&mut self, id: &ProductId, events: &mut Events<CartEvent>) -> bool {
        if !self.ids.remove(id) {
            return false;
        }
        self.items.retain(|item| item.id() != id);
        events.emit(CartEvent::ItemRemoved { id: id.clone() });
        true
    }

    fn clear_notification(&mut self, events: &mut Events<CartEvent>) -> bool {
        self.notification_expires = None;
        if self.notification.take().is_some() {
            events.emit(CartEvent::NotificationCleared);
            true
        } else {
            false
        }
    }
}

#[async_trait]
impl StoreState for CartState {
    type Command = CartCommand;
    type Reply = CartReply;
    type Event = CartEvent;
    type Snapshot = CartSnapshot;
    type Context = ();
    type Error = CartError;

    async fn handle(
        &mut self,
        command: CartCommand,
        _ctx: &(),
        events: &mut Events<CartEvent>,
    ) -> Result<CartReply, CartError> {
        let reply = match command {
            CartCommand::Add(product) => CartReply::Added(self.add(product, events)),
            CartCommand::Remove(id) => CartReply::Removed(self.remove(&id, events)),
            CartCommand::Clear => {
                let count = self.items.len();
                self.items.clear();
                self.ids.clear();
                if count > 0 {
                    events.emit(CartEvent::Cleared { count });
                }
                CartReply::Cleared(count)
            }
            CartCommand::ToggleOpen => {
                self.is_open = !self.is_open;
                events.emit(CartEvent::PanelToggled { open: self.is_open });
                CartReply::Toggled { open: self.is_open }
            }
            CartCommand::DismissNotification => {
                CartReply::Dismissed(self.clear_notification(events))
            }
        };
        Ok(reply)
    }

    fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            ids: self.ids.clone(),
            is_open: self.is_open,
            notification: self.notification.clone(),
        }
    }

    fn deadline(&self) -> Option<Instant> {
        self.notification_expires
    }

    async fn on_deadline(
        &mut self,
        _ctx: &(),
        events: &mut Events<CartEvent>,
    ) -> Result<(), CartError> {
        self.clear_notification(events);
        Ok(())
    }

    async fn on_stop(&mut self, _ctx: &()) {
        debug!(items = self.items.len(), "Cart closed");
    }
}
