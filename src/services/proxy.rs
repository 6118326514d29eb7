use crate::services::models::{HighlightItem, PostItem};

/// Default same-origin media relay
pub const DEFAULT_PROXY_PATH: &str = "/api/proxy";

/// Route a remote media URL through the proxy endpoint
pub fn proxied_url(proxy_path: &str, remote_url: &str) -> String {
    format!("{}?url={}", proxy_path, urlencoding::encode(remote_url))
}

/// How a media item is put on screen
#[derive(Clone, Debug, PartialEq)]
pub enum MediaDisplay {
    /// Played straight from the platform CDN
    Video { src: String },
    /// Loaded through the proxy
    Image { src: String },
    /// Nothing usable to show
    Unavailable,
}

impl MediaDisplay {
    pub fn for_item(item: &PostItem, proxy_path: &str) -> Self {
        if item.is_video() {
            if let Some(src) = item.video_url.as_deref().filter(|url| !url.is_empty()) {
                return MediaDisplay::Video { src: src.to_string() };
            }
        }

        match item.primary_image_url() {
            Some(url) => MediaDisplay::Image { src: proxied_url(proxy_path, url) },
            None => MediaDisplay::Unavailable,
        }
    }

    pub fn src(&self) -> Option<&str> {
        match self {
            MediaDisplay::Video { src } | MediaDisplay::Image { src } => Some(src),
            MediaDisplay::Unavailable => None,
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            MediaDisplay::Video { .. } => "mp4",
            _ => "jpg",
        }
    }
}

/// Name offered to the browser when saving the item at `position` (0-based)
pub fn download_file_name(display: &MediaDisplay, position: usize) -> String {
    format!("story-{}.{}", position + 1, display.file_extension())
}

pub fn highlight_cover_src(highlight: &HighlightItem, proxy_path: &str) -> Option<String> {
    highlight.cover_url().map(|url| proxied_url(proxy_path, url))
}
