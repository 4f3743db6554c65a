//! # Media Links
//!
//! Product photos and videos are shared as Google Drive links
//! (`https://drive.google.com/file/d/{id}/view?usp=sharing`). Those pages cannot be
//! embedded directly, so links are rewritten to a direct-image or preview form at render
//! time. Anything that is not a Drive file link passes through unchanged.

use regex::Regex;
use std::sync::LazyLock;

/// What the link will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

static DRIVE_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"drive\.google\.com/file/d/([^/]+)").expect("drive link pattern is valid")
});

/// Extracts the file id from a Drive share link.
pub fn drive_file_id(url: &str) -> Option<&str> {
    DRIVE_FILE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Rewrites a Drive share link into a form the storefront can display.
///
/// ```rust
/// use thrift_boutique::media::{rewrite_media_url, MediaKind};
///
/// let share = "https://drive.google.com/file/d/1AbC/view?usp=sharing";
/// assert_eq!(rewrite_media_url(share, MediaKind::Image), "https://lh3.googleusercontent.com/d/1AbC");
/// assert_eq!(rewrite_media_url(share, MediaKind::Video), "https://drive.google.com/file/d/1AbC/preview");
/// assert_eq!(rewrite_media_url("https://picsum.photos/500", MediaKind::Image), "https://picsum.photos/500");
/// ```
pub fn rewrite_media_url(url: &str, kind: MediaKind) -> String {
    match drive_file_id(url) {
        Some(id) => match kind {
            MediaKind::Image => format!("https://lh3.googleusercontent.com/d/{id}"),
            MediaKind::Video => format!("https://drive.google.com/file/d/{id}/preview"),
        },
        None => url.to_string(),
    }
}
