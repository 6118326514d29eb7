use dioxus::prelude::*;
use crate::components::icons::ImageOffIcon;
use crate::services::models::HighlightItem;
use crate::services::proxy::highlight_cover_src;

#[derive(Props, Clone, PartialEq)]
pub struct HighlightStripProps {
    pub highlights: Vec<HighlightItem>,
    pub proxy_path: String,
    /// Called with the highlight id
    pub on_select: EventHandler<String>,
}

/// Row of round highlight covers
#[component]
pub fn HighlightStrip(props: HighlightStripProps) -> Element {
    rsx! {
        div {
            class: "flex flex-wrap items-center gap-5 my-8",

            for highlight in props.highlights.iter() {
                button {
                    key: "{highlight.id}",
                    r#type: "button",
                    class: "flex flex-col items-center justify-center gap-1 w-20 hover:opacity-80 transition",
                    onclick: {
                        let id = highlight.id.clone();
                        move |_| props.on_select.call(id.clone())
                    },

                    if let Some(src) = highlight_cover_src(highlight, &props.proxy_path) {
                        img {
                            src: "{src}",
                            alt: "{highlight.title}",
                            class: "w-[75px] h-[75px] rounded-full object-cover border border-border",
                            loading: "lazy"
                        }
                    } else {
                        div {
                            class: "w-[75px] h-[75px] rounded-full bg-muted flex items-center justify-center",
                            ImageOffIcon { class: "w-6 h-6 text-muted-foreground" }
                        }
                    }
                    p {
                        class: "text-xs truncate max-w-full",
                        "{highlight.title}"
                    }
                }
            }
        }
    }
}
