//! Application Configuration
//!
//! Defaults, overridden at compile time by environment variables and at
//! runtime by a JSON `<meta name="task-manager-config">` tag.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://deploy-backend-task-manager.onrender.com/api/v1";
pub const CONFIG_META_NAME: &str = "task-manager-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the REST API, without trailing slash
    pub api_base_url: String,
    /// How long a notification stays visible
    pub toast_duration_ms: u32,
    /// Lines kept by the rolling logger
    pub log_capacity: usize,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            toast_duration_ms: 4000,
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults plus compile-time overrides plus the page's meta tag, if any
    pub fn load() -> Self {
        let mut config = Self::default().with_build_env();
        if let Some(json) = read_meta_config() {
            config = config.merge_json(&json);
        }
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        config
    }

    fn with_build_env(mut self) -> Self {
        if let Some(url) = option_env!("TASK_MANAGER_API_URL") {
            self.api_base_url = url.to_string();
        }
        if let Some(level) = option_env!("TASK_MANAGER_LOG_LEVEL") {
            self.log_level = level.to_string();
        }
        self
    }

    /// Overlay the keys present in `json`. Malformed input leaves `self` as is.
    pub fn merge_json(self, json: &str) -> Self {
        let overlay: serde_json::Value = match serde_json::from_str(json) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("Ignoring malformed {} meta tag: {}", CONFIG_META_NAME, e);
                return self;
            }
        };
        let Some(keys) = overlay.as_object() else {
            log::warn!("Ignoring {} meta tag: expected a JSON object", CONFIG_META_NAME);
            return self;
        };

        let mut current = match serde_json::to_value(&self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => return self,
        };
        for (key, value) in keys {
            current.insert(key.clone(), value.clone());
        }
        match serde_json::from_value(serde_json::Value::Object(current)) {
            Ok(merged) => merged,
            Err(e) => {
                log::warn!("Ignoring invalid {} meta tag: {}", CONFIG_META_NAME, e);
                self
            }
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(target_arch = "wasm32")]
fn read_meta_config() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", CONFIG_META_NAME);
    let element = document.query_selector(&selector).ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_meta_config() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_merge_overrides_only_given_keys() {
        let config = AppConfig::default()
            .merge_json(r#"{"api_base_url":"http://localhost:4000/api/v1","log_level":"debug"}"#);
        assert_eq!(config.api_base_url, "http://localhost:4000/api/v1");
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(config.toast_duration_ms, 4000);
    }

    #[test]
    fn test_malformed_json_is_ignored() {
        let base = AppConfig::default();
        assert_eq!(base.clone().merge_json("{not json"), base);
        assert_eq!(base.clone().merge_json("[1,2]"), base);
        assert_eq!(base.clone().merge_json(r#"{"toast_duration_ms":"soon"}"#), base);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = AppConfig { log_level: "loud".into(), ..Default::default() };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
