//! Commands, replies and events of the cart store.

use crate::model::{Product, ProductId};

/// Requests understood by the cart store.
#[derive(Debug, Clone)]
pub enum CartCommand {
    /// Adds a copy of the product unless it is sold or already in the bag.
    Add(Product),
    /// Removes the item with this id, if present.
    Remove(ProductId),
    /// Empties the bag.
    Clear,
    /// Opens or closes the bag panel.
    ToggleOpen,
    /// Hides the current notification before its timer runs out.
    DismissNotification,
}

/// Replies to [`CartCommand`]s; variants match 1:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartReply {
    /// Whether the item went into the bag.
    Added(bool),
    /// Whether an item was removed.
    Removed(bool),
    /// How many items were removed.
    Cleared(usize),
    /// The panel's new state.
    Toggled { open: bool },
    /// Whether a notification was showing.
    Dismissed(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    ItemAdded { id: ProductId, name: String },
    ItemRemoved { id: ProductId },
    Cleared { count: usize },
    PanelToggled { open: bool },
    NotificationShown { message: String },
    NotificationCleared,
}
