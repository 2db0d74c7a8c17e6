//! Client-side error taxonomy.
//!
//! Every failure is terminal for the attempted operation — nothing here is
//! retried. The only distinction that matters to the UI is whether the
//! server sent a human-readable `detail` message.

use thiserror::Error;

/// Errors produced by API calls and the [`GameClient`](crate::controller::GameClient).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the request and supplied a `detail` message
    /// (FastAPI-style error body). Shown to the user verbatim.
    #[error("{0}")]
    Server(String),

    /// The request never completed (connection refused, DNS, CORS, …).
    #[error("request failed: {0}")]
    Network(String),

    /// The response arrived but couldn't be decoded as the expected type.
    #[error("invalid response: {0}")]
    Decode(String),

    /// An operation that needs a session was attempted without one.
    #[error("no active session")]
    NoSession,
}

impl ApiError {
    /// The server's `detail` message, if this error carries one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Server(detail) => Some(detail),
            _ => None,
        }
    }
}
