use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};

use crate::services::proxy::DEFAULT_PROXY_PATH;

/// Name of the optional global the hosting page can set before the app loads
pub const WINDOW_CONFIG_KEY: &str = "__STORYVIEW_CONFIG__";

/// Runtime settings for the viewer
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Base path of the JSON API answering profile/post/highlight queries
    pub api_base: String,
    /// Same-origin media relay
    pub proxy_path: String,
    /// Upper bound for a single API call
    pub request_timeout_secs: u32,
    /// "error", "warn", "info", "debug" or "trace"
    pub log_level: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            proxy_path: DEFAULT_PROXY_PATH.to_string(),
            request_timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" | "warning" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level().to_level_filter()
    }

    /// API base without a trailing slash
    pub fn api_root(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    /// Read overrides from `window.__STORYVIEW_CONFIG__`, falling back to defaults
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Self {
        use wasm_bindgen::JsValue;

        let Some(window) = web_sys::window() else {
            return Self::default();
        };

        let value = match js_sys::Reflect::get(&window, &JsValue::from_str(WINDOW_CONFIG_KEY)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return Self::default(),
        };

        match serde_wasm_bindgen::from_value::<ViewerConfig>(value) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", WINDOW_CONFIG_KEY, e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_window() -> Self {
        Self::default()
    }
}

/// Configuration set once at startup, before the app is launched
static CONFIG: OnceCell<ViewerConfig> = OnceCell::new();
static DEFAULT_CONFIG: Lazy<ViewerConfig> = Lazy::new(ViewerConfig::default);

pub fn init_config(config: ViewerConfig) {
    log::info!(
        "Using API base {} and proxy {}",
        config.api_base,
        config.proxy_path
    );
    if CONFIG.set(config).is_err() {
        log::warn!("Configuration already initialized, keeping the first one");
    }
}

/// Active configuration, or the defaults if `init_config` was never called
pub fn config() -> &'static ViewerConfig {
    CONFIG.get().unwrap_or_else(|| Lazy::force(&DEFAULT_CONFIG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.api_root(), "/api");
        assert_eq!(config.proxy_path, "/api/proxy");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: ViewerConfig =
            serde_json::from_str(r#"{ "api_base": "https://api.example.com/v1/", "log_level": "DEBUG" }"#)
                .unwrap();
        assert_eq!(config.api_root(), "https://api.example.com/v1");
        assert_eq!(config.proxy_path, "/api/proxy");
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_config_before_init_is_default() {
        assert_eq!(config(), &ViewerConfig::default());
    }

    #[test]
    fn test_unknown_log_level_is_info() {
        let config = ViewerConfig { log_level: "loud".into(), ..Default::default() };
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_level_filter_follows_log_level() {
        let quiet = ViewerConfig { log_level: "warn".into(), ..Default::default() };
        assert_eq!(quiet.level_filter(), log::LevelFilter::Warn);
        // Startup logs below Info until the config is read, so Warn must pass through
        assert!(log::Level::Warn <= ViewerConfig::default().level_filter());
    }
}
