//! TodoMVC Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod controller;
mod storage;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::from_document() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    match rolling_logger::init(&config.log) {
        Ok(logs) => tracing::debug!(capacity = logs.capacity(), "logging initialized"),
        Err(e) => web_sys::console::warn_1(&e.to_string().into()),
    }
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "falling back to default configuration");
    }

    mount_to_body(move || view! { <App config=config /> });
}
