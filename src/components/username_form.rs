use dioxus::prelude::*;
use crate::components::icons::{SearchIcon, Spinner};

#[derive(Props, Clone, PartialEq)]
pub struct UsernameFormProps {
    /// Current text of the input, owned by the page
    pub value: Signal<String>,
    #[props(default = false)]
    pub busy: bool,
    pub on_submit: EventHandler<String>,
}

/// Search box taking a username (or pasted profile link)
#[component]
pub fn UsernameForm(props: UsernameFormProps) -> Element {
    let mut value = props.value;

    rsx! {
        form {
            class: "relative",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                props.on_submit.call(value.read().clone());
            },

            input {
                r#type: "text",
                placeholder: "Enter Instagram Username",
                autocomplete: "off",
                spellcheck: "false",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
                class: "w-full py-3 pl-4 pr-12 rounded-lg bg-muted text-foreground border border-border focus:outline-none focus:ring-2 focus:ring-primary"
            }

            button {
                r#type: "submit",
                class: "absolute right-4 top-1/2 -translate-y-1/2 text-muted-foreground hover:text-foreground transition",
                aria_label: "Search",
                if props.busy {
                    Spinner { class: "w-5 h-5" }
                } else {
                    SearchIcon { class: "w-6 h-6" }
                }
            }
        }
    }
}
