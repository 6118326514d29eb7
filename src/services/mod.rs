// Services
// Backend API access, media proxy URLs and browser downloads

pub mod download;
pub mod errors;
pub mod media_api;
pub mod models;
pub mod proxy;

pub use download::{BrowserDownloader, MediaDownloader};
pub use errors::{DownloadError, FetchError, FetchErrorKind};
pub use media_api::{HttpMediaSource, MediaSource};
pub use models::{HighlightItem, MediaKind, PostItem, ProfileData, Tab, TabContent};
