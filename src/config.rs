//! # Storefront Configuration
//!
//! Everything the storefront needs at startup. Every field has a default carrying the
//! boutique's live values, so a config file only lists what it overrides:
//!
//! ```json
//! {
//!   "launchDate": "2025-08-15T12:00:00Z",
//!   "whatsappNumber": "919760427922"
//! }
//! ```
//!
//! Omitting `catalog` uses the catalog bundled with the crate.

use crate::catalog::Catalog;
use crate::checkout::DEFAULT_GREETING;
use crate::release_gate::{GateError, LaunchSchedule};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_LAUNCH_DATE: &str = "2025-07-25T12:00:00.000Z";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "919760427922";

/// Errors raised while loading or validating a [`StoreConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Bundled catalog is malformed: {0}")]
    BundledCatalog(#[source] serde_json::Error),

    #[error(transparent)]
    LaunchDate(#[from] GateError),

    #[error("Duplicate product id: {0}")]
    DuplicateProductId(String),

    #[error("Duplicate gallery id: {0}")]
    DuplicateGalleryId(String),

    #[error("WhatsApp number must be digits only, with country code: {0:?}")]
    InvalidWhatsappNumber(String),

    #[error("Gate poll interval must be greater than zero")]
    ZeroPollInterval,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    /// RFC 3339 instant the next drop goes live.
    pub launch_date: String,
    /// Checkout recipient, country code first, no `+`.
    pub whatsapp_number: String,
    /// First line of every order message.
    pub greeting: String,
    pub notification_ttl_ms: u64,
    pub gate_poll_interval_ms: u64,
    /// Inline catalog; `None` means the bundled one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Catalog>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            launch_date: DEFAULT_LAUNCH_DATE.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
            notification_ttl_ms: 3_000,
            gate_poll_interval_ms: 1_000,
            catalog: None,
        }
    }
}

impl StoreConfig {
    /// Reads a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading config");
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn launch_schedule(&self) -> Result<LaunchSchedule, ConfigError> {
        Ok(LaunchSchedule::parse(&self.launch_date)?)
    }

    /// The configured catalog, or the bundled one.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog {
            Some(catalog) => Ok(catalog.clone()),
            None => Catalog::bundled().map_err(ConfigError::BundledCatalog),
        }
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    pub fn gate_poll_interval(&self) -> Duration {
        Duration::from_millis(self.gate_poll_interval_ms)
    }

    /// Checks everything that would otherwise fail later, or misbehave silently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.launch_schedule()?;

        let number = &self.whatsapp_number;
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidWhatsappNumber(number.clone()));
        }

        if self.gate_poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }

        let catalog = self.catalog()?;
        let mut seen = HashSet::new();
        for product in &catalog.products {
            if !seen.insert(product.id.as_str()) {
                return Err(ConfigError::DuplicateProductId(product.id.to_string()));
            }
        }
        let mut seen = HashSet::new();
        for item in &catalog.gallery {
            if !seen.insert(item.id.as_str()) {
                return Err(ConfigError::DuplicateGalleryId(item.id.clone()));
            }
        }

        Ok(())
    }
}
