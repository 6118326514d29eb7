// Content tabs: Posts, Stories, Highlights and Reels

use dioxus::prelude::*;
use crate::services::models::Tab;

#[derive(Props, Clone, PartialEq)]
pub struct MediaTabsProps {
    pub selected: Tab,
    pub on_change: EventHandler<Tab>,
}

#[component]
pub fn MediaTabs(props: MediaTabsProps) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-center gap-2 overflow-x-auto my-6 pb-2 scrollbar-hide",
            role: "tablist",

            for tab in Tab::ALL {
                button {
                    key: "{tab}",
                    role: "tab",
                    aria_selected: if props.selected == tab { "true" } else { "false" },
                    class: if props.selected == tab {
                        "px-5 py-2 rounded-full text-sm font-semibold tracking-wide bg-primary text-primary-foreground transition whitespace-nowrap"
                    } else {
                        "px-5 py-2 rounded-full text-sm font-semibold tracking-wide bg-muted hover:bg-muted/80 text-muted-foreground transition whitespace-nowrap"
                    },
                    onclick: move |_| props.on_change.call(tab),
                    "{tab.label()}"
                }
            }
        }
    }
}
