//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.
//! Every request-level failure is terminal: nothing here is retried.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tab error: {0}")]
    Tab(String),

    #[error("Content extraction error: {0}")]
    Extraction(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("API error: received status {0} but failed to parse the error response")]
    ApiStatus(u16),

    #[error("API returned an empty response")]
    EmptyResponse,

    #[error("Failed to parse a non-empty API response as JSON: {0}")]
    MalformedResponse(String),

    #[error("Request was blocked by the API for safety reasons: {0}")]
    SafetyBlock(String),

    #[error("No valid response content returned from the API")]
    NoContent,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_status_message_contains_code_only() {
        let message = Error::ApiStatus(503).to_string();
        assert!(message.contains("503"));
        assert!(message.contains("failed to parse"));
    }

    #[test]
    fn test_api_error_carries_provider_message() {
        let err = Error::Api {
            status: 400,
            message: "API key not valid".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("400"));
        assert!(message.contains("API key not valid"));
    }

    #[test]
    fn test_safety_block_carries_reason() {
        let message = Error::SafetyBlock("SAFETY".to_string()).to_string();
        assert!(message.contains("SAFETY"));
    }
}
