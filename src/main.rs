use leptos::prelude::*;
use verdi_site::{config, logging, App};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = config::load_embedded();
    logging::init(config.logging.level).expect("error initializing logger");
    if let Some(e) = config_error {
        log::warn!("{e}; using default site configuration");
    }
    log::info!("Starting site under base path {}", config.site.base_path);

    mount_to_body(move || view! { <App config=config /> });
}
