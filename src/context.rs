//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::actions::Actions;
use crate::api::HttpApi;
use crate::config::AppConfig;
use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Central state container
    pub store: AppStore,
    api: StoredValue<HttpApi>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self {
            store,
            api: StoredValue::new(HttpApi::new(config.api_base_url.clone())),
            config: StoredValue::new(config),
        }
    }

    /// Mutation entry points bound to the live store
    pub fn actions(&self) -> Actions<HttpApi, AppStore> {
        Actions::new(self.api.get_value(), self.store)
    }

    pub fn toast_duration_ms(&self) -> u32 {
        self.config.with_value(|c| c.toast_duration_ms)
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
