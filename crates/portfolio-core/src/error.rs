//! Error types for the portfolio page

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Page error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Navigation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown section: {id}")]
    UnknownSection { id: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse site configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Document/Host Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Browser window is not available")]
    NoWindow,

    #[error("Document error: {message}")]
    Dom { message: String },

    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn unknown_section(id: impl Into<String>) -> Self {
        Self::UnknownSection { id: id.into() }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error (page keeps running, action becomes a no-op)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::UnknownSection { .. } | Error::NoWindow | Error::Dom { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::warn!("{}: {}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::warn!("{}: {}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::unknown_section("blog");
        assert_eq!(err.to_string(), "Unknown section: blog");

        let err = Error::NoWindow;
        assert!(err.to_string().contains("window"));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("not = = valid").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::ConfigParse(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::unknown_section("x").is_recoverable());
        assert!(Error::dom("no body").is_recoverable());
        assert!(Error::NoWindow.is_recoverable());
        assert!(!Error::config_invalid("bad").is_recoverable());
    }

    #[test]
    fn test_result_ext_preserves_error() {
        let res: std::result::Result<(), Error> = Err(Error::dom("detached"));
        let err = res.context("scrolling").unwrap_err();
        assert!(matches!(err, Error::Dom { .. }));

        let res: std::result::Result<(), Error> = Err(Error::NoWindow);
        let err = res.with_context(|| "measuring".to_string()).unwrap_err();
        assert!(matches!(err, Error::NoWindow));
    }
}
