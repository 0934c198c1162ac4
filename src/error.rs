//! Error types for backend calls

use thiserror::Error;

/// Failure of a request against the todo backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Backend answered with something other than 200
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// Response body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// Request body could not be serialized
    #[error("failed to encode request: {0}")]
    Encode(String),
}

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;
