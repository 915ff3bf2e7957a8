//! Error types for the room client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Malformed server URL
    #[error("Invalid server URL '{0}'")]
    InvalidUrl(String),

    /// HTTP transport error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with an error status
    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The room does not exist (or has already closed)
    #[error("Room '{0}' not found")]
    RoomNotFound(String),

    /// WebSocket connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),
}
