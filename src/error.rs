//! Error types for Gitter API operations.
//!
//! This module defines every error that can surface from the client, the transport
//! and the resource models. The [`Result`] alias is used throughout the crate.
//!
//! # Error Categories
//!
//! | Category | Variants | Raised by |
//! |----------|----------|-----------|
//! | Network | `Transport` | [`Transport`](crate::transport::Transport) |
//! | Wire format | `Decode`, `Json` | [`Transport`](crate::transport::Transport), payload encoding |
//! | Server | `Server` | non-2xx responses |
//! | Construction | `Config`, `Record`, `MissingContext` | client and model constructors |
//!
//! Nothing is retried. Every error reaches the immediate caller unchanged.
//!
//! # Examples
//!
//! ```
//! use gitter_api::GitterError;
//!
//! let err = GitterError::Server { status: 403, body: "{}".into() };
//! assert!(err.is_access_denied());
//! assert_eq!(err.status(), Some(403));
//! ```

use thiserror::Error;

/// Result type for Gitter API operations.
pub type Result<T> = std::result::Result<T, GitterError>;

/// Errors that can occur while talking to the Gitter API.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GitterError {
    /// The request never produced a response (connection refused, TLS failure,
    /// timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body is not valid JSON, or not the container shape the
    /// caller expected.
    ///
    /// The raw body is kept for diagnostics.
    #[error("failed to decode response body: {message}")]
    Decode {
        /// Parser or shape message
        message: String,
        /// Raw response body
        body: String,
    },

    /// The server answered with a non-success status code.
    #[error("server responded with status {status}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Required construction input is missing or unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// A JSON record does not fit the model it is mapped into.
    #[error("invalid {kind} record: {message}")]
    Record {
        /// Model name (`"room"`, `"message"`, ...)
        kind: &'static str,
        /// Mapping failure
        message: String,
    },

    /// The operation needs context the instance was built without.
    #[error("missing context: {0}")]
    MissingContext(&'static str),

    /// Request payload serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GitterError {
    /// Build a [`GitterError::Record`] from a serde failure.
    pub(crate) fn record(kind: &'static str, err: serde_json::Error) -> Self {
        GitterError::Record {
            kind,
            message: err.to_string(),
        }
    }

    /// HTTP status carried by a [`GitterError::Server`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            GitterError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the request with a non-2xx status.
    pub fn is_server_error(&self) -> bool {
        matches!(self, GitterError::Server { .. })
    }

    /// Whether the server denied access (401 or 403).
    pub fn is_access_denied(&self) -> bool {
        self.status()
            .is_some_and(crate::transport::is_access_denied_status)
    }
}
