/// Error types for the remote API
use thiserror::Error;

/// Errors returned by an [`InstanceSource`](super::InstanceSource)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The requested resource does not exist (HTTP 404)
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// Network-related errors
    #[error("Network error: {0}")]
    Network(String),

    /// Any other non-success HTTP status
    #[error("Unexpected response: HTTP {status}: {body}")]
    UnexpectedResponse {
        status: u16,
        body: String,
    },

    /// The response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),
}
