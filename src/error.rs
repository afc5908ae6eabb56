//! Error types for irys-uploads
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Truncated listings (cursor cycles, iteration ceiling) are not errors:
//! they come back as a successful result with `partial` set.

use thiserror::Error;

/// Maximum length of diagnostic detail surfaced to callers
pub const MAX_DETAIL_LEN: usize = 1024;

/// The main error type for irys-uploads
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

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Protocol Errors
    // ============================================================================
    #[error("GraphQL errors returned by endpoint: {}", messages.join("; "))]
    GraphQl { messages: Vec<String> },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Invalid EVM address '{value}': expected 0x followed by 40 hex characters")]
    InvalidAccount { value: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
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

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error, truncating the body
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: truncate(&body.into(), MAX_DETAIL_LEN),
        }
    }

    /// Create a GraphQL protocol error
    pub fn graphql(messages: Vec<String>) -> Self {
        Self::GraphQl { messages }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an invalid account error
    pub fn invalid_account(value: impl Into<String>) -> Self {
        Self::InvalidAccount {
            value: value.into(),
        }
    }

    /// The remote call did not complete or returned a non-success status
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::HttpStatus { .. } | Error::Timeout { .. }
        )
    }

    /// The remote call completed but the body signalled an application error
    pub fn is_protocol(&self) -> bool {
        matches!(
            self,
            Error::GraphQl { .. } | Error::Decode { .. } | Error::JsonParse(_)
        )
    }

    /// Diagnostic text for callers, capped at [`MAX_DETAIL_LEN`] characters
    pub fn details(&self) -> String {
        truncate(&self.to_string(), MAX_DETAIL_LEN)
    }
}

/// Truncate to at most `max` characters on a char boundary
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Result type alias for irys-uploads
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
