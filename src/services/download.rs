//! Saving remote media to disk from the browser
//!
//! The bytes are fetched into a Blob, exposed through an object URL and saved
//! by clicking a temporary `<a download>` element. Both the object URL and the
//! anchor are released by drop guards, so an error halfway through leaks
//! neither.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, Document, HtmlAnchorElement, Request, RequestInit, RequestMode, Response};

use crate::services::errors::DownloadError;

#[async_trait(?Send)]
pub trait MediaDownloader {
    /// Fetch `url` and hand it to the browser as `file_name`
    async fn save(&self, url: &str, file_name: &str) -> Result<(), DownloadError>;
}

/// Downloader using the page's `fetch` and DOM
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDownloader;

#[async_trait(?Send)]
impl MediaDownloader for BrowserDownloader {
    async fn save(&self, url: &str, file_name: &str) -> Result<(), DownloadError> {
        let window = web_sys::window().ok_or(DownloadError::NoWindow)?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|e| DownloadError::Js(format!("Failed to create request: {:?}", e)))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| DownloadError::Js(format!("Fetch failed: {:?}", e)))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| DownloadError::Js("Failed to cast to Response".to_string()))?;

        if !resp.ok() {
            return Err(DownloadError::Http {
                status: resp.status(),
                status_text: resp.status_text(),
            });
        }

        let blob_promise = resp
            .blob()
            .map_err(|e| DownloadError::Js(format!("Failed to read body: {:?}", e)))?;
        let blob: Blob = JsFuture::from(blob_promise)
            .await
            .map_err(|e| DownloadError::Js(format!("Failed to read body: {:?}", e)))?
            .dyn_into()
            .map_err(|_| DownloadError::Js("Failed to cast to Blob".to_string()))?;

        let document = window.document().ok_or(DownloadError::NoWindow)?;
        let object_url = ObjectUrl::from_blob(&blob)?;
        let anchor = TransientAnchor::attach(&document, object_url.as_str(), file_name)?;
        anchor.click();

        log::info!("Saved {} ({} bytes)", file_name, blob.size());
        Ok(())
    }
}

/// Object URL revoked when dropped
struct ObjectUrl(String);

impl ObjectUrl {
    fn from_blob(blob: &Blob) -> Result<Self, DownloadError> {
        web_sys::Url::create_object_url_with_blob(blob)
            .map(ObjectUrl)
            .map_err(|e| DownloadError::Js(format!("Failed to create object URL: {:?}", e)))
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = web_sys::Url::revoke_object_url(&self.0);
    }
}

/// `<a download>` appended to the body, removed when dropped
struct TransientAnchor(HtmlAnchorElement);

impl TransientAnchor {
    fn attach(document: &Document, href: &str, file_name: &str) -> Result<Self, DownloadError> {
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| DownloadError::Js(format!("Failed to create anchor: {:?}", e)))?
            .dyn_into()
            .map_err(|_| DownloadError::Js("Failed to cast to HtmlAnchorElement".to_string()))?;

        anchor.set_href(href);
        anchor.set_download(file_name);

        let body = document
            .body()
            .ok_or_else(|| DownloadError::Js("Document has no body".to_string()))?;
        body.append_child(&anchor)
            .map_err(|e| DownloadError::Js(format!("Failed to attach anchor: {:?}", e)))?;

        Ok(TransientAnchor(anchor))
    }

    fn click(&self) {
        self.0.click();
    }
}

impl Drop for TransientAnchor {
    fn drop(&mut self) {
        self.0.remove();
    }
}
