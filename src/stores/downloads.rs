use dioxus::prelude::*;
use std::collections::HashSet;

use crate::services::download::MediaDownloader;
use crate::stores::state_cell::StateCell;

/// Items with a download in progress, keyed by item identity
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DownloadTracker {
    in_flight: HashSet<String>,
}

impl DownloadTracker {
    /// Mark `key` as downloading. Returns false if it already was.
    pub fn start(&mut self, key: &str) -> bool {
        self.in_flight.insert(key.to_string())
    }

    pub fn finish(&mut self, key: &str) {
        self.in_flight.remove(key);
    }

    pub fn is_downloading(&self, key: &str) -> bool {
        self.in_flight.contains(key)
    }

    pub fn active_count(&self) -> usize {
        self.in_flight.len()
    }
}

/// App-wide download marks. Global so a mark can still be cleared after the
/// page that started the download is gone.
pub static DOWNLOADS: GlobalSignal<DownloadTracker> = Signal::global(DownloadTracker::default);

/// `StateCell` handle onto `DOWNLOADS`
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalDownloads;

impl StateCell<DownloadTracker> for GlobalDownloads {
    fn update<R>(&self, f: impl FnOnce(&mut DownloadTracker) -> R) -> R {
        f(&mut DOWNLOADS.write())
    }

    fn inspect<R>(&self, f: impl FnOnce(&DownloadTracker) -> R) -> R {
        f(&DOWNLOADS.peek())
    }
}

/// Clears the in-flight mark on drop, whatever happened to the download
struct InFlightGuard<C: StateCell<DownloadTracker>> {
    cell: C,
    key: String,
    settled: bool,
}

impl<C: StateCell<DownloadTracker>> Drop for InFlightGuard<C> {
    fn drop(&mut self) {
        let key = std::mem::take(&mut self.key);
        if !self.settled {
            log::error!("Download of {} was interrupted before it finished", key);
        }
        self.cell.update(|tracker| tracker.finish(&key));
    }
}

/// A download the user asked for
#[derive(Clone, Debug, PartialEq)]
pub struct DownloadRequest {
    pub key: String,
    pub url: String,
    pub file_name: String,
}

/// Download one item. Failures are logged and otherwise swallowed.
pub async fn download_media<C>(cell: C, downloader: &dyn MediaDownloader, request: DownloadRequest)
where
    C: StateCell<DownloadTracker>,
{
    if !cell.update(|tracker| tracker.start(&request.key)) {
        log::debug!("Download of {} already running", request.key);
        return;
    }
    let mut guard = InFlightGuard {
        cell: cell.clone(),
        key: request.key.clone(),
        settled: false,
    };

    log::info!("Downloading {} as {}", request.url, request.file_name);
    let result = downloader.save(&request.url, &request.file_name).await;
    guard.settled = true;
    if let Err(e) = result {
        log::error!("Error downloading {}: {}", request.file_name, e);
    }
}
