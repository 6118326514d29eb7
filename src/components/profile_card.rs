use dioxus::prelude::*;
use crate::components::icons::VerifiedIcon;
use crate::services::models::ProfileData;
use crate::services::proxy::proxied_url;
use crate::utils::{format_count_compact, format_with_separator};

#[derive(Props, Clone, PartialEq)]
pub struct ProfileCardProps {
    pub profile: Option<ProfileData>,
    #[props(default = false)]
    pub loading: bool,
    pub proxy_path: String,
}

/// Header with avatar, name, counts and bio of the searched account
#[component]
pub fn ProfileCard(props: ProfileCardProps) -> Element {
    if props.loading {
        return rsx! { ProfileCardSkeleton {} };
    }

    // Profile failures are silent; the header simply stays empty
    let Some(profile) = props.profile else {
        return rsx! {};
    };

    let avatar = profile
        .avatar_url()
        .map(|url| proxied_url(&props.proxy_path, url));
    let initial = profile
        .username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let display_name = profile.display_name().to_string();

    let stats = [
        (profile.media_count, "posts"),
        (profile.follower_count, "followers"),
        (profile.following_count, "following"),
    ]
    .map(|(count, label)| (format_count_compact(count), format_with_separator(count), label));

    rsx! {
        div {
            class: "flex flex-col sm:flex-row items-center gap-6 py-6",

            if let Some(src) = avatar {
                img {
                    src: "{src}",
                    alt: "{profile.username}",
                    class: "w-24 h-24 rounded-full object-cover border-2 border-border",
                    loading: "lazy"
                }
            } else {
                div {
                    class: "w-24 h-24 rounded-full bg-muted flex items-center justify-center text-3xl font-bold",
                    "{initial}"
                }
            }

            div {
                class: "flex-1 min-w-0 text-center sm:text-left",

                div {
                    class: "flex items-center justify-center sm:justify-start gap-2",
                    h2 {
                        class: "text-xl font-bold truncate",
                        "{display_name}"
                    }
                    if profile.is_verified {
                        VerifiedIcon { class: "w-5 h-5 text-blue-500" }
                    }
                }
                p {
                    class: "text-sm text-muted-foreground",
                    "@{profile.username}"
                }

                div {
                    class: "flex justify-center sm:justify-start gap-6 mt-3",
                    for (compact, exact, label) in stats {
                        div {
                            key: "{label}",
                            title: "{exact}",
                            span { class: "font-semibold", "{compact}" }
                            span { class: "text-sm text-muted-foreground ml-1", "{label}" }
                        }
                    }
                }

                if !profile.biography.is_empty() {
                    p {
                        class: "mt-3 text-sm whitespace-pre-line break-words",
                        "{profile.biography}"
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileCardSkeleton() -> Element {
    rsx! {
        div {
            class: "flex items-center gap-6 py-6 animate-pulse",
            role: "status",
            aria_busy: "true",
            span { class: "sr-only", "Loading profile..." }
            div { class: "w-24 h-24 rounded-full bg-muted" }
            div {
                class: "flex-1 space-y-3",
                div { class: "h-5 w-40 bg-muted rounded" }
                div { class: "h-4 w-24 bg-muted rounded" }
                div { class: "h-4 w-64 bg-muted rounded" }
            }
        }
    }
}
