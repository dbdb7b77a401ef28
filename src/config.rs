//! Deployment configuration
//!
//! `Site.toml` at the crate root is embedded at compile time. It carries the
//! base path the site is served under (keep it in sync with `public_url` in
//! `Trunk.toml`) and the console log level.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Raw contents of `Site.toml`
pub const EMBEDDED_CONFIG: &str = include_str!("../Site.toml");

/// Top-level site configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteSection {
    /// Path prefix the site is served under, e.g. `/marketing-phd-site/`
    pub base_path: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: LogLevel,
}

/// Console log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let base = &self.site.base_path;
        if !base.starts_with('/') || !base.ends_with('/') {
            return Err(Error::config_invalid(format!(
                "site.base_path must start and end with '/', got {base:?}"
            )));
        }
        Ok(())
    }

    /// Resolve a file from the static asset directory against the base path.
    pub fn asset_url(&self, file: &str) -> String {
        format!(
            "{}{}",
            self.site.base_path,
            file.trim_start_matches('/')
        )
    }
}

/// Load the embedded configuration, falling back to defaults.
///
/// Runs before the logger exists, so a failure is returned alongside the
/// defaults for the caller to report once logging is up.
pub fn load_embedded() -> (SiteConfig, Option<Error>) {
    match SiteConfig::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    }
}
