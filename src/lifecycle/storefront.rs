use crate::cart::{self, CartError};
use crate::catalog::{Catalog, FilterCriteria, ProductLookup, ShopView, FEATURED_COUNT};
use crate::clients::{CartClient, ReleaseGateClient};
use crate::config::{ConfigError, StoreConfig};
use crate::model::{GalleryItem, Product};
use crate::release_gate::{self, Clock, Countdown, SystemClock};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("Store task failed: {0}")]
    TaskFailed(String),
}

/// One shopper's session: the catalog plus the running gate and cart stores.
///
/// `Storefront` is responsible for:
/// - **Lifecycle Management**: starting both stores and stopping them together
/// - **Gating**: every catalog read goes through the gate's current answer
/// - **Checkout**: turning the bag into the configured WhatsApp link
///
/// # Example
///
/// ```rust
/// use thrift_boutique::catalog::FilterCriteria;
/// use thrift_boutique::config::StoreConfig;
/// use thrift_boutique::lifecycle::Storefront;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = Storefront::start(StoreConfig::default())?;
///
///     let view = store.shop(&FilterCriteria::default());
///     let first = view.products[0].id.to_string();
///     store.add_to_cart(&first).await?;
///
///     println!("{}", store.checkout_link());
///     store.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct Storefront {
    pub cart: CartClient,
    pub gate: ReleaseGateClient,
    catalog: Catalog,
    whatsapp_number: String,
    greeting: String,
    /// Store tasks, awaited on shutdown.
    handles: Vec<JoinHandle<()>>,
}

impl Storefront {
    /// Validates `config` and starts the stores against the wall clock.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn start(config: StoreConfig) -> Result<Self, StorefrontError> {
        Self::start_with_clock(config, Arc::new(SystemClock))
    }

    /// Like [`Storefront::start`], reading time from `clock`.
    pub fn start_with_clock(
        config: StoreConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, StorefrontError> {
        config.validate()?;
        let schedule = config.launch_schedule()?;
        let catalog = config.catalog()?;

        let (gate_actor, gate) = release_gate::new(schedule, clock, config.gate_poll_interval());
        let gate_handle = tokio::spawn(gate_actor.run(()));

        let (cart_actor, cart) = cart::new(config.notification_ttl());
        let cart_handle = tokio::spawn(cart_actor.run(()));

        info!(
            products = catalog.products.len(),
            launch = %schedule.launch,
            live = gate.is_live(),
            "Storefront started"
        );

        Ok(Self {
            cart,
            gate,
            catalog,
            whatsapp_number: config.whatsapp_number,
            greeting: config.greeting,
            handles: vec![gate_handle, cart_handle],
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn shop(&self, criteria: &FilterCriteria) -> ShopView<'_> {
        ShopView::build(&self.catalog, self.gate.is_live(), criteria)
    }

    pub fn featured(&self) -> Vec<&Product> {
        self.catalog.featured(self.gate.is_live(), FEATURED_COUNT)
    }

    pub fn product(&self, id: &str) -> ProductLookup<'_> {
        self.catalog.lookup(id, self.gate.is_live())
    }

    pub fn gallery(&self) -> &[GalleryItem] {
        &self.catalog.gallery
    }

    /// Time left until the drop; all zeros once it is live.
    pub fn countdown(&self) -> Countdown {
        self.gate.countdown()
    }

    /// Adds the product with `id` to the bag.
    ///
    /// Unknown, gated, sold and already-added ids are reported as not added.
    pub async fn add_to_cart(&self, id: &str) -> Result<bool, StorefrontError> {
        match self.product(id) {
            ProductLookup::Found(product) => Ok(self.cart.add_to_cart(product.clone()).await?),
            other => {
                debug!(id, lookup = ?other, "Not addable");
                Ok(false)
            }
        }
    }

    /// The WhatsApp link for the current bag.
    pub fn checkout_link(&self) -> String {
        self.cart
            .checkout_link(&self.whatsapp_number, &self.greeting)
    }

    /// Stops both stores and waits for them. Pending timers are cancelled with their tasks.
    pub async fn shutdown(self) -> Result<(), StorefrontError> {
        info!("Shutting down storefront");

        // Dropping the clients closes the channels; each store exits its loop.
        drop(self.cart);
        drop(self.gate);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Store task failed");
                return Err(StorefrontError::TaskFailed(e.to_string()));
            }
        }

        info!("Storefront stopped");
        Ok(())
    }
}
