use dioxus::prelude::*;
use std::rc::Rc;

use crate::components::{HighlightStrip, MediaGrid, MediaTabs, ProfileCard, UsernameForm};
use crate::components::icons::Spinner;
use crate::services::media_api::{HttpMediaSource, MediaSource};
use crate::services::models::Tab;
use crate::stores::config_store;
use crate::stores::viewer::{self, ViewerState};

/// Empty viewer at `/`
#[component]
pub fn Viewer() -> Element {
    rsx! {
        StoryViewer { initial_username: None }
    }
}

/// Viewer opened on a username from the URL (`/u/:username`)
#[component]
pub fn ViewerFor(username: String) -> Element {
    rsx! {
        StoryViewer {
            key: "{username}",
            initial_username: Some(username)
        }
    }
}

#[component]
fn StoryViewer(initial_username: Option<String>) -> Element {
    let state = use_signal(ViewerState::new);
    let mut input = use_signal(|| initial_username.clone().unwrap_or_default());
    let source: Rc<dyn MediaSource> =
        use_hook(|| Rc::new(HttpMediaSource::new(config_store::config())) as Rc<dyn MediaSource>);
    let proxy_path = config_store::config().proxy_path.clone();

    // Deep links submit once on mount
    let deep_link_source = source.clone();
    use_hook(move || {
        if let Some(username) = initial_username {
            spawn(async move {
                viewer::submit_username(state, deep_link_source.as_ref(), username).await;
            });
        }
    });

    let on_submit = {
        let source = source.clone();
        move |text: String| {
            let source = source.clone();
            input.set(text.trim().to_string());
            spawn(async move {
                viewer::submit_username(state, source.as_ref(), text).await;
            });
        }
    };

    let on_tab = {
        let source = source.clone();
        move |tab: Tab| {
            let source = source.clone();
            spawn(async move {
                viewer::select_tab(state, source.as_ref(), tab).await;
            });
        }
    };

    let on_highlight = {
        let source = source.clone();
        move |highlight_id: String| {
            let source = source.clone();
            spawn(async move {
                viewer::open_highlight(state, source.as_ref(), highlight_id).await;
            });
        }
    };

    let current = state.read();

    rsx! {
        div {
            class: "max-w-5xl mx-auto px-4 py-8",

            div {
                class: "w-full p-5 bg-card text-foreground border border-border rounded-3xl",

                UsernameForm {
                    value: input,
                    busy: current.loading || current.profile_loading,
                    on_submit: on_submit,
                }

                if current.has_session() {
                    ProfileCard {
                        profile: current.profile.clone(),
                        loading: current.profile_loading,
                        proxy_path: proxy_path.clone(),
                    }
                    MediaTabs {
                        selected: current.tab,
                        on_change: on_tab,
                    }
                }

                if let Some(error) = current.error.as_ref() {
                    p {
                        class: "mt-4 text-red-500",
                        role: "alert",
                        "{error}"
                    }
                }

                if current.shows_highlights() {
                    HighlightStrip {
                        highlights: current.highlights.clone(),
                        proxy_path: proxy_path.clone(),
                        on_select: on_highlight,
                    }
                }

                if current.loading {
                    div {
                        class: "flex justify-center py-10 text-muted-foreground",
                        Spinner { class: "w-8 h-8" }
                    }
                }

                MediaGrid {
                    items: current.stories.clone(),
                    proxy_path: proxy_path.clone(),
                }
            }
        }
    }
}
