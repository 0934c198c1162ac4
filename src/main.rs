//! Todo List Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod debounce;
mod error;
mod filter;
mod models;
mod routes;
mod store;
mod sync;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] logger already set: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
