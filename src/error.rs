//! Error types for the book API client.
//!
//! The transport layer reports [`HttpError`](crate::traits::HttpError);
//! everything above it speaks [`ApiError`]. `NotFound` gets a dedicated
//! variant because callers distinguish "the resource does not exist"
//! from other non-2xx statuses.

use thiserror::Error;

use crate::traits::HttpError;

/// Errors surfaced by the API client and repository.
///
/// All variants propagate to the caller; the state holder is the terminal
/// boundary that decides what (not) to do with them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, invalid URL)
    #[error("network error: {0}")]
    Network(#[from] HttpError),

    /// The server returned a non-2xx status other than 404
    #[error("server returned HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// The server returned 404 for the requested book
    #[error("book not found")]
    NotFound,

    /// The response body could not be deserialized into the expected type
    #[error("failed to parse response body: {0}")]
    Parse(String),

    /// The request payload could not be serialized to JSON
    #[error("failed to serialize request body: {0}")]
    Serialize(String),
}
