//! Error kinds for the whole import pipeline.
//!
//! Every error is fatal: nothing in the core retries or downgrades a failure
//! to a default value. [`MatchLogError::Format`] always carries the raw text
//! that failed so a bad line in the document can be found by searching for it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchLogError {
    /// Text does not match an expected pattern (ordinal marker, vocabulary,
    /// link syntax, field-slot name, required fields).
    #[error("format error: {message} (text: {text:?})")]
    Format { message: String, text: String },

    /// A required configuration identifier is missing, or the configuration
    /// could not be loaded.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A name, sheet, tab, document or column could not be found.
    #[error("lookup error: {what} not found: {name:?}")]
    Lookup { what: String, name: String },

    /// An assembled row does not have the expected column count.
    #[error("shape error: expected {expected} columns, got {actual}")]
    Shape { expected: usize, actual: usize },

    #[error("i/o error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MatchLogError>;

impl MatchLogError {
    pub fn format(message: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
            text: text.into(),
        }
    }

    pub fn lookup(what: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Lookup {
            what: what.into(),
            name: name.into(),
        }
    }

    pub fn missing_config(key: &str) -> Self {
        Self::Configuration(format!("required identifier `{key}` is not set"))
    }

    pub fn io(path: impl std::fmt::Display, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            source,
        }
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup { .. })
    }

    pub fn is_shape(&self) -> bool {
        matches!(self, Self::Shape { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<config::ConfigError> for MatchLogError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
