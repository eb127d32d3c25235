//! Metro API error types.

use crate::network::NetworkError;

/// Errors that can occur when fetching the dataset from the Metro API.
#[derive(Debug, thiserror::Error)]
pub enum MetroApiError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API key cannot be sent as a header value
    #[error("METRO_API_KEY contains characters not allowed in a header")]
    InvalidApiKey,

    /// Authentication failed
    #[error("unauthorized: check METRO_API_KEY")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Fetched records do not form a valid network
    #[error("invalid dataset: {0}")]
    InvalidData(#[from] NetworkError),

    /// No upstream API is configured
    #[error("not configured: {0}")]
    NotConfigured(String),
}
