//! Error handling for catalog generation.
//!
//! Every failure while building the catalog is fatal for the run: the
//! document is all-or-nothing, so errors bubble up unchanged to the caller
//! through the `?` operator.
//!
//! ```
//! use dsdoc::error::CatalogError;
//!
//! fn describe(err: &CatalogError) -> &'static str {
//!     match err {
//!         CatalogError::Resolution { .. } => "registry could not resolve a builder",
//!         CatalogError::Io(_) => "snapshot or config could not be read",
//!         _ => "other failure",
//!     }
//! }
//! ```
//!
//! Missing split statistics are *not* an error; they render as
//! `None computed` and generation continues.
//!
//! ## Context Extension Trait
//!
//! `ResultExt` adds `.context()` to any `Result` whose error converts into
//! [`CatalogError`]:
//!
//! ```no_run
//! use dsdoc::error::ResultExt as _;
//!
//! fn load() -> dsdoc::error::Result<String> {
//!     std::fs::read_to_string("registry.json").context("Failed to read registry snapshot")
//! }
//! ```

use std::fmt;

/// Main error type for catalog operations.
#[derive(Debug)]
pub enum CatalogError {
    /// The registry cannot produce a descriptor or info record for a name/config pair
    Resolution {
        name: String,
        config: Option<String>,
        reason: String,
    },

    /// I/O errors (reading snapshots or configs, writing logs)
    Io(std::io::Error),

    /// Configuration errors
    Config(String),

    /// Generic error with context
    Other(String),
}

impl CatalogError {
    /// Resolution failure for a plain builder name.
    pub fn unresolved(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Resolution {
            name: name.into(),
            config: None,
            reason: reason.into(),
        }
    }

    /// Resolution failure for a builder/config pair.
    pub fn unresolved_config(
        name: impl Into<String>,
        config: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Resolution {
            name: name.into(),
            config: Some(config.into()),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolution {
                name,
                config: Some(config),
                reason,
            } => write!(f, "Cannot resolve builder '{name}/{config}': {reason}"),
            Self::Resolution {
                name,
                config: None,
                reason,
            } => write!(f, "Cannot resolve builder '{name}': {reason}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<CatalogError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: CatalogError = e.into();
            CatalogError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: CatalogError = e.into();
            CatalogError::Other(format!("{}: {}", f(), err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_display() {
        let err = CatalogError::unresolved("mnist", "not registered");
        assert_eq!(
            err.to_string(),
            "Cannot resolve builder 'mnist': not registered"
        );

        let err = CatalogError::unresolved_config("cifar", "brightness_5", "unknown config");
        assert_eq!(
            err.to_string(),
            "Cannot resolve builder 'cifar/brightness_5': unknown config"
        );
    }

    #[test]
    fn test_result_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "registry.json",
        ));

        let result: Result<()> = result.context("Failed to read registry");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Failed to read registry"));
        assert!(message.contains("registry.json"));
    }
}
