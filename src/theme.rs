//! Light/dark theme: detection from the environment and reflection onto the
//! document root.
//!
//! The browser is reached through two small traits so the shell can be
//! driven by fakes in host tests.

use wasm_bindgen::JsValue;

use crate::error::{Error, Result};

/// Class toggled on `<html>`; Tailwind is configured with `darkMode: "class"`.
pub const DARK_CLASS: &str = "dark";

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Source of the user's OS color-scheme preference.
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> Result<bool>;
}

/// Something that displays the theme, normally the document root element.
pub trait ThemeTarget {
    fn set_dark(&self, dark: bool) -> Result<()>;
}

/// Ask the environment for its preference, defaulting to light on failure.
pub fn detect(query: &impl ColorSchemeQuery) -> Theme {
    match query.prefers_dark() {
        Ok(prefers_dark) => {
            let theme = Theme::from_prefers_dark(prefers_dark);
            log::info!("Detected {} color scheme", theme.label());
            theme
        }
        Err(e) => {
            log::warn!("Color scheme detection failed ({e}), using light theme");
            Theme::Light
        }
    }
}

/// Reflect `theme` onto the target. Applying the same theme twice is a no-op.
pub fn apply(target: &impl ThemeTarget, theme: Theme) {
    if let Err(e) = target.set_dark(theme.is_dark()) {
        log::warn!("Failed to apply {} theme: {e}", theme.label());
    }
}

/// `window.matchMedia("(prefers-color-scheme: dark)")`
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaColorScheme;

impl ColorSchemeQuery for MediaColorScheme {
    fn prefers_dark(&self) -> Result<bool> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let list = window
            .match_media(DARK_QUERY)
            .map_err(js_error)?
            .ok_or(Error::MediaQueryUnsupported)?;
        Ok(list.matches())
    }
}

/// `document.documentElement`
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl ThemeTarget for DocumentRoot {
    fn set_dark(&self, dark: bool) -> Result<()> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let root = window
            .document()
            .and_then(|doc| doc.document_element())
            .ok_or(Error::NoDocument)?;
        root.class_list()
            .toggle_with_force(DARK_CLASS, dark)
            .map_err(js_error)?;
        Ok(())
    }
}

fn js_error(value: JsValue) -> Error {
    Error::dom(format!("{value:?}"))
}
