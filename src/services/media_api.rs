use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::future::Future;

use crate::services::errors::FetchError;
use crate::services::models::{HighlightItem, PostItem, ProfileData, Tab, TabContent};
use crate::stores::config_store::ViewerConfig;

/// Everything the viewer needs from the backend
#[async_trait(?Send)]
pub trait MediaSource {
    /// Profile header data for a username
    async fn fetch_profile(&self, username: &str) -> Result<ProfileData, FetchError>;

    /// Items for one tab of a user's page
    async fn fetch_tab(&self, tab: Tab, username: &str) -> Result<TabContent, FetchError>;

    /// Frames inside a single highlight reel
    async fn fetch_highlight(&self, highlight_id: &str) -> Result<Vec<PostItem>, FetchError>;
}

/// `MediaSource` backed by the JSON API
pub struct HttpMediaSource {
    api_root: String,
    timeout_secs: u32,
}

impl HttpMediaSource {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            api_root: config.api_root().to_string(),
            timeout_secs: config.request_timeout_secs,
        }
    }

    pub fn tab_url(&self, tab: Tab, username: &str) -> String {
        format!(
            "{}/{}?username={}",
            self.api_root,
            tab.as_str(),
            urlencoding::encode(username)
        )
    }

    pub fn highlight_url(&self, highlight_id: &str) -> String {
        format!(
            "{}/highlights/{}",
            self.api_root,
            urlencoding::encode(highlight_id)
        )
    }

    pub fn profile_url(&self, username: &str) -> String {
        format!(
            "{}/profile?username={}",
            self.api_root,
            urlencoding::encode(username)
        )
    }

    async fn get_text(&self, url: String) -> Result<String, FetchError> {
        with_timeout(get_text(url), self.timeout_secs).await
    }
}

#[async_trait(?Send)]
impl MediaSource for HttpMediaSource {
    async fn fetch_profile(&self, username: &str) -> Result<ProfileData, FetchError> {
        let body = self.get_text(self.profile_url(username)).await?;
        parse_record(&body)
    }

    async fn fetch_tab(&self, tab: Tab, username: &str) -> Result<TabContent, FetchError> {
        let body = self.get_text(self.tab_url(tab, username)).await?;
        match tab {
            Tab::Highlights => parse_list::<HighlightItem>(&body).map(TabContent::Highlights),
            _ => parse_list::<PostItem>(&body).map(TabContent::Media),
        }
    }

    async fn fetch_highlight(&self, highlight_id: &str) -> Result<Vec<PostItem>, FetchError> {
        let body = self.get_text(self.highlight_url(highlight_id)).await?;
        parse_list(&body)
    }
}

async fn get_text(url: String) -> Result<String, FetchError> {
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::network(e.to_string()))?;

    log::debug!("GET {} -> {}", url, response.status());

    if !response.ok() {
        return Err(FetchError::from_status(
            response.status(),
            &response.status_text(),
        ));
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::network(format!("Failed to read response body: {}", e)))
}

/// Race a request against a timer
async fn with_timeout<F, T>(request: F, seconds: u32) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    let timer = gloo_timers::future::TimeoutFuture::new(seconds.saturating_mul(1000));
    futures::pin_mut!(request);
    futures::pin_mut!(timer);

    match future::select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(FetchError::timeout(seconds)),
    }
}

/// List endpoints answer with a bare array or with an envelope
#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Data { data: Vec<T> },
    Items { items: Vec<T> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordBody<T> {
    Data { data: T },
    Bare(T),
}

pub fn parse_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, FetchError> {
    let parsed: ListBody<T> =
        serde_json::from_str(body).map_err(|e| FetchError::decode(e.to_string()))?;

    Ok(match parsed {
        ListBody::Bare(items) | ListBody::Data { data: items } | ListBody::Items { items } => items,
    })
}

pub fn parse_record<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    let parsed: RecordBody<T> =
        serde_json::from_str(body).map_err(|e| FetchError::decode(e.to_string()))?;

    Ok(match parsed {
        RecordBody::Data { data } | RecordBody::Bare(data) => data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::errors::FetchErrorKind;

    fn source() -> HttpMediaSource {
        HttpMediaSource::new(&ViewerConfig {
            api_base: "https://api.example.com/".into(),
            ..Default::default()
        })
    }

    #[test]
    fn test_endpoint_urls() {
        let api = source();
        assert_eq!(
            api.tab_url(Tab::Reels, "some.user"),
            "https://api.example.com/reels?username=some.user"
        );
        assert_eq!(
            api.highlight_url("highlight:1790"),
            "https://api.example.com/highlights/highlight%3A1790"
        );
        assert_eq!(
            api.profile_url("a b"),
            "https://api.example.com/profile?username=a%20b"
        );
    }

    #[test]
    fn test_parse_list_shapes() {
        let bare: Vec<PostItem> = parse_list(r#"[{ "id": "1", "media_type": 1 }]"#).unwrap();
        assert_eq!(bare.len(), 1);

        let data: Vec<PostItem> =
            parse_list(r#"{ "data": [{ "id": "1" }, { "id": "2" }] }"#).unwrap();
        assert_eq!(data.len(), 2);

        let items: Vec<HighlightItem> =
            parse_list(r#"{ "items": [{ "id": "H1", "title": "Trips" }] }"#).unwrap();
        assert_eq!(items[0].id, "H1");

        let empty: Vec<PostItem> = parse_list("[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_parse_garbage_is_decode_error() {
        let err = parse_list::<PostItem>("<html>rate limited</html>").unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::Decode);
    }

    #[test]
    fn test_parse_record_with_and_without_envelope() {
        let bare: ProfileData = parse_record(r#"{ "username": "a" }"#).unwrap();
        assert_eq!(bare.username, "a");

        let wrapped: ProfileData = parse_record(r#"{ "data": { "username": "b" } }"#).unwrap();
        assert_eq!(wrapped.username, "b");
    }
}
