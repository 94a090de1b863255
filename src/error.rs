use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for linemark operations
#[derive(Error, Debug)]
pub enum LinemarkError {
    #[error("Language error: {0}")]
    Language(#[from] LanguageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type LinemarkResult<T> = Result<T, LinemarkError>;

/// Failures while loading or selecting translations
#[derive(Error, Debug)]
pub enum LanguageError {
    #[error("Language resource not found at {path:?}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No bundled language named {language:?}")]
    NotBundled { language: String },

    #[error("Failed to decode language resource {path:?}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("Invalid language target: expected a language name or a translation map, found {found}")]
    InvalidTarget { found: String },

    #[error("Invalid placeholder delimiters: {0}")]
    Delimiters(#[from] regex::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown config key: {key}")]
    UnknownKey { key: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}
