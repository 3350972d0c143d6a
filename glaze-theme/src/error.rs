//! Error types for the chrome theming system.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the chrome theming system.
///
/// Most failure paths here degrade instead of erroring: provider queries
/// substitute the fallback accent, compositor rejections become `false`
/// returns, release failures are swallowed. What remains is construction
/// failure and configuration loading.
#[derive(Error, Debug)]
pub enum ChromeError {
    /// The platform color-settings service cannot be used on this system.
    ///
    /// Fatal to the provider instance; callers must not use it further.
    #[error("platform color settings are not supported on this system")]
    PlatformUnsupported,

    /// Chrome configuration file was not found.
    #[error("chrome config file not found: {path:?}")]
    ConfigFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing chrome configuration content.
    #[error("failed to parse chrome config: {details}")]
    ConfigParse {
        /// Details about the parse error.
        details: String,
    },

    /// Error parsing a chrome configuration file.
    #[error("failed to parse chrome config {path:?}: {details}")]
    ConfigParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for chrome theming operations.
pub type ChromeResult<T> = Result<T, ChromeError>;

impl ChromeError {
    /// Create a config file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigFileNotFound { path: path.into() }
    }

    /// Create a config parse error without file context.
    pub fn parse(details: impl Into<String>) -> Self {
        Self::ConfigParse {
            details: details.into(),
        }
    }

    /// Create a config parse error for a specific file.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ConfigParseError {
            path: path.into(),
            details: details.into(),
        }
    }
}
