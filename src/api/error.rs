//! Error types for the movie database client.

use thiserror::Error;

/// Shown in the results box when a search fails for any reason but "no match".
pub const SEARCH_FAILED_MESSAGE: &str = "Something went wrong with fetching movies";
/// Shown in the results box when the API reports no match.
pub const SEARCH_NOT_FOUND_MESSAGE: &str = "Movie not found";
/// Shown in the detail pane when a lookup fails.
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to load movie details";

/// Errors that can occur while talking to the movie database.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, TLS, reset).
    #[error("Connection to movie database failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("Movie database returned HTTP {status}")]
    Status { status: u16 },

    /// The body was not the JSON shape we expect.
    #[error("Failed to decode movie database response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// The payload carried `Response: "False"`.
    #[error("Movie database reported no match: {message}")]
    NotFound { message: String },

    /// Request could not be built (bad base URL).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Message surfaced by the search flow.
    pub fn search_message(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => SEARCH_NOT_FOUND_MESSAGE,
            _ => SEARCH_FAILED_MESSAGE,
        }
    }

    /// Message surfaced by the detail flow.
    pub fn detail_message(&self) -> &'static str {
        DETAIL_FAILED_MESSAGE
    }

    /// Short tag for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Connection { .. } => "connection_error",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
            ApiError::NotFound { .. } => "not_found",
            ApiError::InvalidRequest(_) => "invalid_request",
        }
    }
}
