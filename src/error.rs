//! Error types for the site shell

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while booting or driving the site.
///
/// None of these reach the visitor: each call site has a fallback
/// (home page, light theme, default config).
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Navigation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown page key: {key:?}")]
    UnknownPage { key: String },

    // ─────────────────────────────────────────────────────────────
    // Browser Environment Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No global window object available")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("matchMedia is not supported in this environment")]
    MediaQueryUnsupported,

    #[error("DOM error: {message}")]
    Dom { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse site configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid site configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Logging Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },
}

impl Error {
    pub fn unknown_page(key: impl Into<String>) -> Self {
        Self::UnknownPage { key: key.into() }
    }

    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_page_message_quotes_key() {
        let err = Error::unknown_page("blog");
        assert_eq!(err.to_string(), "Unknown page key: \"blog\"");
    }

    #[test]
    fn test_config_parse_from_toml_error() {
        let toml_err = toml::from_str::<toml::Table>("= nope").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::ConfigParse(_)));
        assert!(err.to_string().starts_with("Failed to parse site configuration"));
    }

    #[test]
    fn test_convenience_constructors() {
        assert!(matches!(Error::dom("x"), Error::Dom { .. }));
        assert!(matches!(
            Error::config_invalid("x"),
            Error::ConfigInvalid { .. }
        ));
        assert!(matches!(Error::logging("x"), Error::Logging { .. }));
    }
}
