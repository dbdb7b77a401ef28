pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod nav;
pub mod pages;
pub mod shell;
pub mod theme;

use components::footer::Footer;
use components::header::Header;
use config::SiteConfig;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use nav::Page;
use pages::page_view;
use shell::ShellState;
use theme::{DocumentRoot, MediaColorScheme};

pub use error::{Error, Result};

/// Root shell: owns the page selection and the theme.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    let mut initial = ShellState::new();
    initial.detect_theme(&MediaColorScheme);
    let state = RwSignal::new(initial);

    let current = Memo::new(move |_| state.with(ShellState::current));
    let active_theme = Memo::new(move |_| state.with(ShellState::theme));

    // Memo only notifies on change, so the class is touched once per switch.
    Effect::new(move || theme::apply(&DocumentRoot, active_theme.get()));

    let on_select = Callback::new(move |page: Page| state.update(|s| s.select(page)));

    view! {
        <div class="min-h-screen bg-white dark:bg-neutral-950 text-neutral-900 dark:text-neutral-100">
            <a
                href="#main"
                class="sr-only focus:not-sr-only focus:absolute focus:left-4 focus:top-4 focus:z-50 focus:rounded-lg focus:bg-white focus:px-4 focus:py-2 dark:focus:bg-neutral-900"
            >
                "Skip to content"
            </a>
            <Header current=current on_select=on_select />
            {move || page_view(current.get())}
            <Footer />
        </div>
    }
}
