use dioxus::prelude::*;
use dioxus::dioxus_core::spawn_forever;
use crate::components::icons::{DownloadIcon, ImageOffIcon, Spinner};
use crate::services::download::BrowserDownloader;
use crate::services::models::PostItem;
use crate::services::proxy::{download_file_name, MediaDisplay};
use crate::stores::downloads::{self, DownloadRequest, GlobalDownloads, DOWNLOADS};

#[derive(Props, Clone, PartialEq)]
pub struct MediaGridProps {
    pub items: Vec<PostItem>,
    pub proxy_path: String,
}

/// Grid of media cards for the current tab or opened highlight
#[component]
pub fn MediaGrid(props: MediaGridProps) -> Element {
    if props.items.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "mt-4 grid grid-cols-1 md:grid-cols-3 gap-4 place-content-center",
            for (position, item) in props.items.iter().enumerate() {
                MediaCard {
                    key: "{item.key(position)}",
                    item: item.clone(),
                    position,
                    proxy_path: props.proxy_path.clone(),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct MediaCardProps {
    pub item: PostItem,
    /// 0-based place in the grid, used for the saved file name
    pub position: usize,
    pub proxy_path: String,
}

#[component]
pub fn MediaCard(props: MediaCardProps) -> Element {
    let display = MediaDisplay::for_item(&props.item, &props.proxy_path);
    let key = props.item.key(props.position);
    let is_downloading = DOWNLOADS.read().is_downloading(&key);
    let alt = format!("Story {}", props.position);

    let download_request = display.src().map(|src| DownloadRequest {
        key: key.clone(),
        url: src.to_string(),
        file_name: download_file_name(&display, props.position),
    });

    rsx! {
        div {
            class: "p-2 bg-card border border-border rounded-lg h-fit",

            div {
                class: "h-[480px] w-full overflow-hidden rounded",
                match &display {
                    MediaDisplay::Video { src } => rsx! {
                        video {
                            controls: true,
                            preload: "metadata",
                            src: "{src}",
                            class: "w-full h-full object-cover rounded"
                        }
                    },
                    MediaDisplay::Image { src } => rsx! {
                        img {
                            src: "{src}",
                            alt: "{alt}",
                            loading: "lazy",
                            class: "w-full h-full object-cover rounded"
                        }
                    },
                    MediaDisplay::Unavailable => rsx! {
                        div {
                            class: "w-full h-full flex flex-col items-center justify-center gap-2 bg-muted text-muted-foreground",
                            ImageOffIcon { class: "w-8 h-8" }
                            span { class: "text-sm", "Media unavailable" }
                        }
                    },
                }
            }

            if let Some(request) = download_request {
                button {
                    r#type: "button",
                    class: "mt-2 w-full flex items-center justify-center gap-2 px-4 py-2 rounded-lg bg-primary text-primary-foreground font-medium hover:opacity-90 transition disabled:opacity-60 disabled:cursor-not-allowed",
                    disabled: is_downloading,
                    onclick: move |_| {
                        let request = request.clone();
                        // Not tied to this card: switching tabs unmounts the grid
                        spawn_forever(async move {
                            downloads::download_media(GlobalDownloads, &BrowserDownloader, request).await;
                        });
                    },
                    if is_downloading {
                        Spinner { class: "w-4 h-4" }
                        "Downloading..."
                    } else {
                        DownloadIcon { class: "w-[18px] h-[18px]" }
                        "Download"
                    }
                }
            }
        }
    }
}
