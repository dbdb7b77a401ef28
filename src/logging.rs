//! Logging configuration using the `log` facade
//!
//! Records go to the browser console through `console_log`. The level comes
//! from `Site.toml`; see [`crate::config::LogLevel`].

use crate::config::LogLevel;
use crate::error::{Error, Result};

/// Initialize the console logger.
///
/// Fails if a logger has already been installed.
pub fn init(level: LogLevel) -> Result<()> {
    console_log::init_with_level(level.into())
        .map_err(|e| Error::logging(e.to_string()))?;

    log::info!("Logging initialized at {:?}", level);
    Ok(())
}
