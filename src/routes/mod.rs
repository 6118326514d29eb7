use dioxus::prelude::*;

pub mod viewer;
pub mod about;

use viewer::{Viewer, ViewerFor};
use about::About;
use crate::components::icons::CameraIcon;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Viewer {},

        #[route("/u/:username")]
        ViewerFor { username: String },

        #[route("/about")]
        About {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    let current_route = use_route::<Route>();
    let on_about = matches!(current_route, Route::About {});

    rsx! {
        div {
            class: "min-h-screen bg-background text-foreground transition-colors flex flex-col",

            header {
                class: "sticky top-0 z-20 bg-background/80 backdrop-blur-sm border-b border-border",
                div {
                    class: "max-w-5xl mx-auto px-4 py-3 flex items-center justify-between",

                    Link {
                        to: Route::Viewer {},
                        class: "flex items-center gap-2 font-bold text-xl hover:opacity-80 transition",
                        CameraIcon { class: "w-7 h-7" }
                        span { "storyview" }
                    }

                    nav {
                        class: "flex items-center gap-4 text-sm",
                        NavLink { to: Route::Viewer {}, label: "Viewer", active: !on_about }
                        NavLink { to: Route::About {}, label: "About", active: on_about }
                    }
                }
            }

            main {
                class: "flex-1",
                Outlet::<Route> {}
            }

            footer {
                class: "border-t border-border py-4 text-center text-xs text-muted-foreground",
                "Only public content is available. Media is loaded through this site's proxy."
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str, active: bool) -> Element {
    let font_class = if active { "font-bold text-foreground" } else { "text-muted-foreground" };

    rsx! {
        Link {
            to: to,
            class: "px-3 py-1 rounded-full hover:bg-accent transition {font_class}",
            "{label}"
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "max-w-xl mx-auto px-6 py-16 text-center space-y-4",
            h1 { class: "text-2xl font-bold", "Page not found" }
            p {
                class: "text-muted-foreground",
                "Nothing lives at /{path}."
            }
            Link {
                to: Route::Viewer {},
                class: "inline-block px-4 py-2 rounded-full bg-primary text-primary-foreground",
                "Back to the viewer"
            }
        }
    }
}
