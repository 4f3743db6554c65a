use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// A copy of a [`Product`] taken when it was added to the cart.
///
/// Later changes to the catalog entry (for example it selling out elsewhere) do not reach
/// items already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
}

impl CartItem {
    pub fn snapshot_of(product: &Product) -> Self {
        Self {
            product: product.clone(),
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn price(&self) -> u64 {
        self.product.price
    }
}
