//! Custom error types for themekit
//!
//! User-friendly error messages for all failure scenarios.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for themekit
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A required color key is absent from a theme's `Colors` section
    #[error("Theme '{theme}' is missing the required color '{key}'.\n\n  → Add `{key} = \"#RRGGBB\"` under the [Colors] section.")]
    MissingColor {
        /// Theme being constructed
        theme: String,
        /// Missing color key
        key: &'static str,
    },

    /// A required top-level section is absent from a theme resource
    #[error("Theme '{theme}' has no [{section}] section.\n\n  → Both [Colors] and [Fonts] must be present ([Fonts] may be empty).")]
    MissingSection {
        /// Theme being constructed
        theme: String,
        /// Missing section name
        section: &'static str,
    },

    /// No theme with the given name is known
    #[error("Theme '{0}' not found.\n\n  → Run 'themekit list' to see available themes.")]
    ThemeNotFound(String),

    /// Theme file has an extension we cannot parse
    #[error("Unsupported theme file: {}\n\n  → Theme files must end in .toml or .json.", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The process-wide registry was used before `install`
    #[error("The global theme registry has not been installed.")]
    RegistryNotInstalled,

    /// The process-wide registry was installed twice
    #[error("The global theme registry is already installed.\n\n  → Call teardown() before installing a new one.")]
    RegistryAlreadyInstalled,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Theme file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization/deserialization error
    #[error("TOML file is invalid: {0}")]
    Toml(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl From<toml::de::Error> for ThemeError {
    fn from(err: toml::de::Error) -> Self {
        ThemeError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for ThemeError {
    fn from(err: toml::ser::Error) -> Self {
        ThemeError::Toml(err.to_string())
    }
}

/// Result type alias using ThemeError
pub type Result<T> = std::result::Result<T, ThemeError>;
