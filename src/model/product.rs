//! Catalog products.
//!
//! Every product is a unique secondhand item: there is no quantity, only `sold`.
//! Products are read-only once loaded; the cart keeps its own copies
//! ([`CartItem`](crate::model::CartItem)).

use crate::media::{rewrite_media_url, MediaKind};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::Display;

/// Type-safe identifier for Products (the catalog slug, e.g. `chic-denim-jacket`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Garment measurements as written on the tag (`36"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurements {
    pub bust: String,
    pub length: String,
}

/// Represents one piece in the boutique's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Whole rupees.
    pub price: u64,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub category: String,
    pub brand: String,
    pub size: String,
    #[serde(default)]
    pub measurements: Measurements,
    pub condition: String,
    #[serde(default)]
    pub sold: bool,
    /// Part of the next drop: hidden until the release gate opens.
    #[serde(default)]
    pub is_upcoming: bool,
}

impl Product {
    /// Creates a product with the fields the filter engine looks at; the rest start empty.
    ///
    /// # Arguments
    /// * `id` - Catalog slug
    /// * `name` - Display name
    /// * `brand` - Label, or `Unbranded`
    /// * `size` - One of the canonical sizes (`XS` … `4XL`)
    /// * `condition` - e.g. `Gently Used`
    /// * `price` - Whole rupees
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        brand: impl Into<String>,
        size: impl Into<String>,
        condition: impl Into<String>,
        price: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image_urls: Vec::new(),
            video_url: None,
            category: String::new(),
            brand: brand.into(),
            size: size.into(),
            measurements: Measurements::default(),
            condition: condition.into(),
            sold: false,
            is_upcoming: false,
        }
    }

    pub fn sold_out(mut self) -> Self {
        self.sold = true;
        self
    }

    pub fn in_next_drop(mut self) -> Self {
        self.is_upcoming = true;
        self
    }

    pub fn with_images<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.image_urls = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Visible under the given gate state.
    pub fn is_visible(&self, release_live: bool) -> bool {
        !self.is_upcoming || release_live
    }

    /// First image, rewritten for direct display. Shown on the shop grid.
    pub fn primary_image(&self) -> Option<String> {
        self.image_urls
            .first()
            .map(|url| rewrite_media_url(url, MediaKind::Image))
    }

    /// Second image, shown on hover. Falls back to the primary image.
    pub fn hover_image(&self) -> Option<String> {
        self.image_urls
            .get(1)
            .map(|url| rewrite_media_url(url, MediaKind::Image))
            .or_else(|| self.primary_image())
    }

    /// Every image, rewritten for direct display.
    pub fn gallery_images(&self) -> Vec<String> {
        self.image_urls
            .iter()
            .map(|url| rewrite_media_url(url, MediaKind::Image))
            .collect()
    }

    /// The video link in embeddable form.
    pub fn video_embed(&self) -> Option<String> {
        self.video_url
            .as_deref()
            .map(|url| rewrite_media_url(url, MediaKind::Video))
    }
}
