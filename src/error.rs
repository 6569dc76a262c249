//! Error types for typegen
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for typegen
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Inference Errors
    // ============================================================================
    #[error("Failed to decode document: {message}")]
    Decode { message: String },

    #[error("Unsupported document shape: {message}")]
    Shape { message: String },

    #[error("Field '{field}' does not hold an object-shaped value")]
    NestedType { field: String },

    // ============================================================================
    // Manifest Errors
    // ============================================================================
    #[error("Manifest error: {message}")]
    Manifest { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Max retries ({max_retries}) exceeded")]
    MaxRetriesExceeded { max_retries: u32 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("Output error: {message}")]
    Output { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a shape error
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape {
            message: message.into(),
        }
    }

    /// Create a nested-type error naming the offending field
    pub fn nested_type(field: impl Into<String>) -> Self {
        Self::NestedType {
            field: field.into(),
        }
    }

    /// Create a manifest error
    pub fn manifest(message: impl Into<String>) -> Self {
        Self::Manifest {
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

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}

/// Result type alias using the crate Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::nested_type("options");
        assert_eq!(
            err.to_string(),
            "Field 'options' does not hold an object-shaped value"
        );

        let err = Error::http_status(404, "not found");
        assert_eq!(err.to_string(), "HTTP 404: not found");
    }

    #[test]
    fn test_decode_error_wraps_parse_failure() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = Error::decode(parse_err.to_string());
        assert!(err.to_string().starts_with("Failed to decode document"));
    }
}
