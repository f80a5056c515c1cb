//! Error types for the chat completion client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OpenAIError>;

/// OpenAI client errors.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Missing API key or invalid settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection failed or timed out
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response, or a response without usable content
    #[error("API error: {0}")]
    Api(String),

    /// Body was not the expected JSON shape
    #[error("Parse error: {0}")]
    Parse(String),
}
