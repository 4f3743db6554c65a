use crate::media::{rewrite_media_url, MediaKind};
use serde::{Deserialize, Serialize};

/// A lookbook photo. Display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    /// Shareable link to the hosted image.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl GalleryItem {
    pub fn image_url(&self) -> String {
        rewrite_media_url(&self.url, MediaKind::Image)
    }
}
