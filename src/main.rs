use leptos::prelude::*;
use portfolio::{logging, App};
use portfolio_core::prelude::*;
use portfolio_core::{parse_config, SiteConfig};

const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();

    let parsed = parse_config(SITE_TOML);
    let log_settings = parsed
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    logging::init(&log_settings).expect("error initializing logger");

    // Invalid config renders with defaults
    let config = parsed.unwrap_or_else(|e| {
        warn!("Ignoring site.toml: {}", e);
        SiteConfig::default()
    });

    mount_to_body(move || view! { <App config=config /> });
}
