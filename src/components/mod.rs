pub mod footer;
pub mod header;
pub mod icons;
pub mod layout;

use leptos::prelude::*;

use crate::config::SiteConfig;

/// Resolve a static asset against the configured base path.
pub fn asset_url(file: &str) -> String {
    use_context::<SiteConfig>()
        .unwrap_or_default()
        .asset_url(file)
}
