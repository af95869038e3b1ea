#![allow(warnings)]
//! Care Portal Frontend Entry Point

mod models;
mod api;
mod config;
mod context;
mod error;
mod forms;
mod load;
mod routes;
mod session;
mod store;
mod components;
mod pages;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if rolling_logger::init(config.log_level, rolling_logger::DEFAULT_CAPACITY).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }
    log::info!("care portal starting, api at {}", config.api_base_url);

    mount_to_body(App);
}
