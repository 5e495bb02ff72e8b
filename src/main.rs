//! Portfolio Frontend Entry Point

mod models;
mod config;
mod content;
mod error;
mod logging;
mod markdown;
mod dom;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let config = SiteConfig::load();
    logging::init(config.log_level());
    log::info!(target: "app", "starting portfolio, asset base {:?}", config.asset_base);

    mount_to_body(move || view! { <App config=config /> });
}
