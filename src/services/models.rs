use serde::{Deserialize, Serialize};
use std::fmt;

/// Content category selectable in the viewer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Posts,
    Stories,
    Highlights,
    Reels,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Posts, Tab::Stories, Tab::Highlights, Tab::Reels];

    /// Lowercase name, used both as the API path segment and in user-facing messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Posts => "posts",
            Tab::Stories => "stories",
            Tab::Highlights => "highlights",
            Tab::Reels => "reels",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Posts => "POSTS",
            Tab::Stories => "STORIES",
            Tab::Highlights => "HIGHLIGHTS",
            Tab::Reels => "REELS",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media kind as reported by the platform (`media_type`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum MediaKind {
    Image,
    Video,
    Other(u32),
}

impl From<u32> for MediaKind {
    fn from(value: u32) -> Self {
        match value {
            1 => MediaKind::Image,
            2 => MediaKind::Video,
            other => MediaKind::Other(other),
        }
    }
}

impl From<MediaKind> for u32 {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Image => 1,
            MediaKind::Video => 2,
            MediaKind::Other(other) => other,
        }
    }
}

impl Default for MediaKind {
    fn default() -> Self {
        MediaKind::Other(0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageVariant {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Set of image renditions attached to a post
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageVersions {
    #[serde(default, alias = "candidates")]
    pub items: Vec<ImageVariant>,
}

/// A single media entry (post, story frame, reel or highlight frame)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostItem {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "media_type", default)]
    pub kind: MediaKind,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default, alias = "image_versions2")]
    pub image_versions: Option<ImageVersions>,
}

impl PostItem {
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }

    /// First image rendition, which the platform orders best-first
    pub fn primary_image_url(&self) -> Option<&str> {
        self.image_versions
            .as_ref()
            .and_then(|versions| versions.items.first())
            .map(|variant| variant.url.as_str())
            .filter(|url| !url.is_empty())
    }

    /// Key for this item at `position`. The position is folded in so repeated ids
    /// in one list still get distinct keys.
    pub fn key(&self, position: usize) -> String {
        if self.id.trim().is_empty() {
            format!("position-{}", position)
        } else {
            format!("{}@{}", self.id, position)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CroppedImage {
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverMedia {
    #[serde(default)]
    pub cropped_image_version: Option<CroppedImage>,
}

/// A highlight reel summary, shown as a round thumbnail
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HighlightItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub cover_media: Option<CoverMedia>,
    #[serde(default)]
    pub title: String,
}

impl HighlightItem {
    pub fn cover_url(&self) -> Option<&str> {
        self.cover_media
            .as_ref()
            .and_then(|cover| cover.cropped_image_version.as_ref())
            .map(|image| image.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePicture {
    pub url: String,
}

/// Public profile metadata
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    pub username: String,
    #[serde(rename = "fullName", alias = "full_name", default)]
    pub full_name: String,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub hd_profile_pic_url_info: Option<ProfilePicture>,
    #[serde(default)]
    pub media_count: u64,
    #[serde(default)]
    pub follower_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(rename = "isVerified", alias = "is_verified", default)]
    pub is_verified: bool,
}

impl ProfileData {
    pub fn avatar_url(&self) -> Option<&str> {
        self.hd_profile_pic_url_info
            .as_ref()
            .map(|pic| pic.url.as_str())
            .filter(|url| !url.is_empty())
    }

    /// Full name when set, otherwise the handle
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}

/// Result of a per-tab fetch. The highlights tab yields highlight summaries,
/// every other tab yields media items.
#[derive(Clone, Debug, PartialEq)]
pub enum TabContent {
    Media(Vec<PostItem>),
    Highlights(Vec<HighlightItem>),
}

impl TabContent {
    pub fn len(&self) -> usize {
        match self {
            TabContent::Media(items) => items.len(),
            TabContent::Highlights(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ids come back as strings from some endpoints and as numbers from others
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_item_from_platform_json() {
        let json = r#"{
            "id": "3301_99",
            "media_type": 1,
            "image_versions": { "items": [{ "url": "https://cdn.example.com/a.jpg", "width": 1080 }] }
        }"#;
        let item: PostItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, MediaKind::Image);
        assert_eq!(item.primary_image_url(), Some("https://cdn.example.com/a.jpg"));
        assert!(!item.is_video());
    }

    #[test]
    fn test_video_item_and_numeric_id() {
        let json = r#"{ "id": 42, "media_type": 2, "video_url": "https://cdn.example.com/v.mp4" }"#;
        let item: PostItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "42");
        assert!(item.is_video());
        assert_eq!(item.primary_image_url(), None);
    }

    #[test]
    fn test_candidates_alias() {
        let json = r#"{ "id": "x", "media_type": 8, "image_versions2": { "candidates": [{ "url": "https://c/1.jpg" }] } }"#;
        let item: PostItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, MediaKind::Other(8));
        assert_eq!(item.primary_image_url(), Some("https://c/1.jpg"));
    }

    #[test]
    fn test_item_key_falls_back_to_position() {
        let with_id = PostItem { id: "abc".into(), ..Default::default() };
        let without_id = PostItem::default();
        assert_eq!(with_id.key(3), "abc@3");
        assert_eq!(without_id.key(3), "position-3");
    }

    #[test]
    fn test_repeated_ids_get_distinct_keys() {
        let items = vec![
            PostItem { id: "3301_99".into(), ..Default::default() },
            PostItem { id: "3301_99".into(), ..Default::default() },
        ];
        let keys: Vec<String> = items.iter().enumerate().map(|(pos, item)| item.key(pos)).collect();
        assert_eq!(keys, vec!["3301_99@0", "3301_99@1"]);
    }

    #[test]
    fn test_profile_field_names() {
        let json = r#"{
            "username": "natgeo",
            "fullName": "National Geographic",
            "biography": "Taking our understanding of the world further.",
            "hd_profile_pic_url_info": { "url": "https://cdn.example.com/p.jpg" },
            "media_count": 30000,
            "follower_count": 280000000,
            "following_count": 150,
            "isVerified": true
        }"#;
        let profile: ProfileData = serde_json::from_str(json).unwrap();
        assert_eq!(profile.display_name(), "National Geographic");
        assert_eq!(profile.avatar_url(), Some("https://cdn.example.com/p.jpg"));
        assert!(profile.is_verified);

        let snake = r#"{ "username": "someone", "full_name": "", "is_verified": false }"#;
        let profile: ProfileData = serde_json::from_str(snake).unwrap();
        assert_eq!(profile.display_name(), "someone");
        assert_eq!(profile.avatar_url(), None);
    }

    #[test]
    fn test_highlight_cover() {
        let json = r#"{ "id": "highlight:1", "title": "Trips", "cover_media": { "cropped_image_version": { "url": "https://c/h.jpg" } } }"#;
        let highlight: HighlightItem = serde_json::from_str(json).unwrap();
        assert_eq!(highlight.cover_url(), Some("https://c/h.jpg"));
        assert_eq!(highlight.title, "Trips");
    }

    #[test]
    fn test_tab_names() {
        assert_eq!(Tab::default(), Tab::Posts);
        assert_eq!(Tab::Highlights.to_string(), "highlights");
        assert_eq!(serde_json::to_string(&Tab::Reels).unwrap(), "\"reels\"");
    }
}
