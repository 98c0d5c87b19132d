//! Classic Homes Marketplace Entry Point

mod app;
mod catalog;
mod charts;
mod components;
mod config;
mod context;
mod genai;
mod markdown;
mod mock_data;
mod models;
mod navigator;
mod policies;
mod pricing;
mod screen;
mod store;
mod upload;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Err(e) = console_logger::init_logger("Marketplace", config.log_level(), config.log_capacity) {
        web_sys::console::warn_1(&format!("Logger unavailable: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("Using default configuration: {}", e);
    }
    log::info!("Classic Homes Marketplace starting");

    mount_to_body(move || view! { <App config=config /> });
}
