#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::config_store::{self, ViewerConfig};

// Modules
mod components;
mod routes;
mod services;
mod stores;
mod utils;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        // Accept every level; the configured one is applied through log::set_max_level
        wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
        log::set_max_level(log::LevelFilter::Info);
    }

    // Read after the logger is up so a malformed config warning is visible
    let config = ViewerConfig::from_window();
    log::set_max_level(config.level_filter());

    log::info!("Starting storyview");

    config_store::init_config(config);

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<routes::Route> {}
    }
}
