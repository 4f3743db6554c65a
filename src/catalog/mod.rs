//! # Catalog & Filter Engine
//!
//! The catalog is loaded once and never mutated. Everything the shop pages show is derived
//! from it on demand by pure functions:
//!
//! 1. [`visible_catalog`] gates out upcoming pieces before the drop is live.
//! 2. [`facet_options`] lists the brands, sizes and conditions present in what is visible.
//! 3. [`apply_filters`] narrows the visible list by the shopper's [`FilterCriteria`].
//!
//! None of these can fail: unknown filter labels degrade to "no constraint" and unknown ids
//! to [`ProductLookup::NotFound`].
//!
//! ```rust
//! use thrift_boutique::catalog::{Catalog, FilterCriteria, ShopView};
//!
//! let catalog = Catalog::bundled().unwrap();
//! let view = ShopView::build(&catalog, false, &FilterCriteria::default());
//! assert!(view.products.iter().all(|p| !p.sold && !p.is_upcoming));
//! ```

mod criteria;
mod facets;
mod filter;

pub use criteria::*;
pub use facets::*;
pub use filter::*;

use crate::model::{GalleryItem, Product};
use serde::{Deserialize, Serialize};

/// The boutique's own catalog, shipped with the binary.
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Number of pieces in the home page's featured strip.
pub const FEATURED_COUNT: usize = 3;

/// All products and lookbook photos, before any gating or filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
}

/// Outcome of opening a product page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductLookup<'a> {
    Found(&'a Product),
    /// Part of a drop that has not gone live yet.
    Upcoming(&'a Product),
    NotFound,
}

impl Catalog {
    pub fn new(products: Vec<Product>, gallery: Vec<GalleryItem>) -> Self {
        Self { products, gallery }
    }

    /// Parses the catalog bundled with the crate.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        serde_json::from_str(BUNDLED_CATALOG)
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|product| product.id.as_str() == id)
    }

    pub fn visible(&self, release_live: bool) -> Vec<&Product> {
        visible_catalog(&self.products, release_live)
    }

    /// Resolves a product page, hiding gated pieces before launch.
    pub fn lookup(&self, id: &str, release_live: bool) -> ProductLookup<'_> {
        match self.get(id) {
            Some(product) if product.is_visible(release_live) => ProductLookup::Found(product),
            Some(product) => ProductLookup::Upcoming(product),
            None => ProductLookup::NotFound,
        }
    }

    /// The first `count` visible pieces still for sale, in catalog order.
    pub fn featured(&self, release_live: bool, count: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| !product.sold && product.is_visible(release_live))
            .take(count)
            .collect()
    }
}

/// Everything the shop page renders for one set of criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopView<'a> {
    /// Products passing every filter, in catalog order.
    pub products: Vec<&'a Product>,
    pub facets: FacetOptions,
    pub active_filter_count: usize,
    /// Products visible before filtering.
    pub visible_count: usize,
}

impl<'a> ShopView<'a> {
    pub fn build(catalog: &'a Catalog, release_live: bool, criteria: &FilterCriteria) -> Self {
        let visible = catalog.visible(release_live);
        Self {
            facets: facet_options(&visible),
            products: apply_filters(&visible, criteria),
            active_filter_count: criteria.active_filter_count(),
            visible_count: visible.len(),
        }
    }
}
