#![allow(warnings)]
//! Repository List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod edit;
mod error;
mod logging;
mod models;
mod scroll;
mod store;

use app::App;
use config::SearchConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = SearchConfig::default();
    logging::init(config.log_level);
    log::info!("[APP] Mounting repository list");

    mount_to_body(move || view! { <App config=config /> });
}
