//! Task Manager Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod models;
mod route;
mod session;
mod store;
mod tasks;
#[cfg(test)]
mod testing;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use rolling_logger::RollingLogger;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(e) = RollingLogger::init(config.log_capacity, config.level_filter()) {
        web_sys::console::warn_1(&format!("Logger not installed: {}", e).into());
    }
    log::info!("Task manager starting, API at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
