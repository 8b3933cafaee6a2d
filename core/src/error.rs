//! Error types for the login pipeline.
//!
//! # Design
//! `LoginError` is the whole recoverable taxonomy a caller ever sees: either
//! the exchange did not complete (`Connectivity`) or it completed and the
//! answer was unusable (`InvalidData`). The transport's own error is kept in
//! `TransportError` for logging and is deliberately dropped at the mapper.

use thiserror::Error;

/// Errors delivered to a login completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    /// The transport could not complete the exchange.
    #[error("could not reach the login service")]
    Connectivity,

    /// The exchange completed but the response was not a valid login answer.
    #[error("login service returned invalid data")]
    InvalidData,
}

/// Failures reported by an [`crate::HttpClient`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Network-level failure (DNS, connect, I/O, protocol).
    #[error("network error: {0}")]
    Network(String),

    /// The transport produced neither an error nor a complete response.
    #[error("unexpected values representation")]
    UnexpectedRepresentation,
}

/// Errors raised while loading a [`crate::ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid client config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid base url: {0}")]
    Url(#[from] url::ParseError),

    /// The base URL parsed but has no host component.
    #[error("base url has no host: {0}")]
    MissingHost(String),
}
