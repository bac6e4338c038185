//! Error types for the API client.
//!
//! # Design
//! Two failure sources exist below the fetch operations: the transport
//! (`TransportError`) and the JSON decoder (`DecodeError`). Callers only ever
//! see `ApiError`, a single flat shape whose `reason` is the source error's
//! message verbatim. There is no retry or classification beyond that.

use thiserror::Error;

/// A GET that did not produce a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection refused, DNS or TLS failure, timeout.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },
}

/// A response body that does not match the expected JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to decode response: {0}")]
pub struct DecodeError(pub String);

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError(err.to_string())
    }
}

/// A string that names no resource kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource kind: {0}")]
pub struct UnknownKind(pub String);

/// The one error every fetch operation returns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ApiError {
    pub reason: String,
}

impl ApiError {
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError {
            reason: err.to_string(),
        }
    }
}

impl From<DecodeError> for ApiError {
    fn from(err: DecodeError) -> Self {
        ApiError {
            reason: err.to_string(),
        }
    }
}
