use dioxus::prelude::*;
use crate::routes::Route;

#[component]
pub fn About() -> Element {
    rsx! {
        div {
            class: "max-w-4xl mx-auto px-6 py-12",
            h1 {
                class: "text-4xl font-bold mb-8",
                "About storyview"
            }

            div {
                class: "prose dark:prose-invert max-w-none space-y-8",
                section {
                    class: "space-y-4",
                    h2 {
                        class: "text-2xl font-semibold",
                        "What does it do?"
                    }
                    p {
                        "storyview lets you browse the public posts, stories, highlights and reels of an Instagram account by username, and save any of them to your device."
                    }
                    p {
                        "Enter a username, an @handle or a pasted profile link. Links of the form "
                        code { "/u/<username>" }
                        " open the viewer on that account directly."
                    }
                }

                section {
                    class: "space-y-4",
                    h2 {
                        class: "text-2xl font-semibold",
                        "How media is loaded"
                    }
                    div {
                        class: "grid md:grid-cols-2 gap-4 mt-4",
                        div {
                            class: "border border-border rounded-lg p-4",
                            h3 { class: "font-semibold mb-2", "Images through the proxy" }
                            p {
                                class: "text-sm text-muted-foreground",
                                "The platform's image CDN refuses cross-origin requests, so every image and highlight cover is fetched through this site's own /api/proxy endpoint."
                            }
                        }
                        div {
                            class: "border border-border rounded-lg p-4",
                            h3 { class: "font-semibold mb-2", "Videos direct" }
                            p {
                                class: "text-sm text-muted-foreground",
                                "Videos play and download straight from the platform."
                            }
                        }
                        div {
                            class: "border border-border rounded-lg p-4",
                            h3 { class: "font-semibold mb-2", "Nothing is stored" }
                            p {
                                class: "text-sm text-muted-foreground",
                                "Searches and results live only in this tab and are gone on reload."
                            }
                        }
                        div {
                            class: "border border-border rounded-lg p-4",
                            h3 { class: "font-semibold mb-2", "Private accounts" }
                            p {
                                class: "text-sm text-muted-foreground",
                                "Private accounts cannot be viewed. You will see a message instead of results."
                            }
                        }
                    }
                }

                Link {
                    to: Route::Viewer {},
                    class: "inline-block px-4 py-2 rounded-full bg-primary text-primary-foreground no-underline",
                    "Open the viewer"
                }
            }
        }
    }
}
