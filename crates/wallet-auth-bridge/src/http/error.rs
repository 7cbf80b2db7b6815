/*
[INPUT]:  Error sources (HTTP, API, preconditions, serialization)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the auth bridge
#[derive(Error, Debug)]
pub enum BridgeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Identity API returned an error response
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// No wallet is connected
    #[error("No wallet address")]
    NoWalletAddress,

    /// No active chain on the wallet connection
    #[error("No chain found")]
    NoChain,

    /// Active chain is not in the chain registry
    #[error("Unsupported chain: {name}")]
    UnsupportedChain { name: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BridgeError {
    /// Check if the error is a failed adapter precondition rather than a
    /// collaborator failure
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            BridgeError::NoWalletAddress
                | BridgeError::NoChain
                | BridgeError::UnsupportedChain { .. }
        )
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        BridgeError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }
}

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;
