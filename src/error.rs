//! Error types for the Mints client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// Broad classification of an [`Error`]
///
/// Callers that only need to decide "fix the config", "try again later",
/// "inspect the server's answer" or "fix the input" can match on this
/// instead of on individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid credentials, URL or config file
    Configuration,
    /// DNS, connection, TLS or timeout failure
    Transport,
    /// The server answered with a status >= 400
    Http,
    /// Options or payload could not be serialized
    Encoding,
}

/// The main error type for the Mints client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ============================================================================
    // Encoding Errors
    // ============================================================================
    #[error("Failed to encode request: {message}")]
    Encoding { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an encoding error
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config { .. }
            | Error::MissingConfigField { .. }
            | Error::InvalidConfigValue { .. }
            | Error::InvalidUrl(_)
            | Error::YamlParse(_)
            | Error::Io(_) => ErrorKind::Configuration,
            Error::Transport(_) | Error::Timeout { .. } => ErrorKind::Transport,
            Error::HttpStatus { .. } => ErrorKind::Http,
            Error::Encoding { .. } | Error::JsonParse(_) => ErrorKind::Encoding,
        }
    }

    /// HTTP status carried by this error, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body carried by an HTTP status error
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::HttpStatus { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Check if the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::HttpStatus { status: 404, .. })
    }
}

// The request URL can carry the API key, so it never survives the conversion
impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Transport(error.without_url())
    }
}

/// Result type alias for the Mints client
pub type Result<T> = std::result::Result<T, Error>;
