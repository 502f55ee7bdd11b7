//! Motion Showcase Entry Point

mod app;
mod components;
mod context;
mod logging;
mod style;

use app::App;
use leptos::prelude::*;
use widget_state::ShowcaseConfig;

const CONFIG_JSON: &str = include_str!("../assets/showcase.json");

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match ShowcaseConfig::from_json(CONFIG_JSON) {
        Ok(config) => (config, None),
        Err(e) => (ShowcaseConfig::default(), Some(e)),
    };
    logging::init(&config.log_level);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "falling back to the built-in showcase config");
    }

    mount_to_body(move || view! { <App config=config /> });
}
