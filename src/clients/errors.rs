//! Error types for Storefront operations.
//!
//! Every executor invocation ends in exactly one payload or exactly one
//! [`StorefrontError`]. Each variant maps to one failure class, and the
//! retry loop decides what to do by looking only at the variant:
//!
//! - [`StorefrontError::Configuration`]: credentials missing, never retried
//! - [`StorefrontError::RemoteGraphql`]: the service answered with an
//!   `errors` list, never retried
//! - [`StorefrontError::TransientTransport`]: 429, 430, 5xx or a connection
//!   failure, retried up to the attempt budget
//! - [`StorefrontError::TerminalTransport`]: any other transport failure
//! - [`StorefrontError::InvalidRequest`]: rejected before sending
//!
//! # Example
//!
//! ```rust
//! use storefront_bff::StorefrontError;
//!
//! let error = StorefrontError::from_status(503, "Service Unavailable", None);
//! assert!(error.is_transient());
//! assert_eq!(error.status(), Some(503));
//!
//! let error = StorefrontError::from_status(404, "Not Found", None);
//! assert!(!error.is_transient());
//! ```

use std::fmt;

use thiserror::Error;

use crate::error::ConfigError;

/// A failure below the GraphQL layer: a non-2xx status, a connection
/// problem, or a body that could not be read as a GraphQL response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    /// HTTP status code, when the service answered at all.
    pub status: Option<u16>,
    /// Human readable description of the failure.
    pub message: String,
    /// Value of the `X-Request-Id` response header, if present.
    pub request_id: Option<String>,
}

impl TransportError {
    /// Returns `true` for statuses worth retrying: rate limiting (429, and
    /// Shopify's 430 for suspected bot traffic) and any server error.
    #[must_use]
    pub const fn is_transient_status(status: u16) -> bool {
        matches!(status, 429 | 430 | 500..=599)
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(
                f,
                "Storefront request failed with status {status}: {}",
                self.message
            )?,
            None => write!(f, "Storefront request failed: {}", self.message)?,
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request id: {request_id})")?;
        }
        Ok(())
    }
}

impl std::error::Error for TransportError {}

/// The Storefront service accepted the request but reported errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Storefront GraphQL Error: {}", .messages.join(", "))]
pub struct RemoteGraphqlError {
    /// The `message` of every entry in the response's `errors` list.
    pub messages: Vec<String>,
}

/// Unified error type for Storefront operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    /// Required configuration is missing or invalid.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// The response carried a non-empty `errors` list.
    #[error(transparent)]
    RemoteGraphql(#[from] RemoteGraphqlError),

    /// A transport failure that may succeed on retry.
    #[error(transparent)]
    TransientTransport(TransportError),

    /// A transport failure that will not succeed on retry.
    #[error(transparent)]
    TerminalTransport(TransportError),

    /// The request was rejected before it was sent.
    #[error("Invalid Storefront request: {reason}")]
    InvalidRequest {
        /// Why the request was rejected.
        reason: &'static str,
    },
}

impl StorefrontError {
    /// Classifies a non-2xx response by its status code.
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>, request_id: Option<String>) -> Self {
        let error = TransportError {
            status: Some(status),
            message: message.into(),
            request_id,
        };
        if TransportError::is_transient_status(status) {
            Self::TransientTransport(error)
        } else {
            Self::TerminalTransport(error)
        }
    }

    /// Returns `true` if the retry loop may try again after this error.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::TransientTransport(_))
    }

    /// Returns the HTTP status behind a transport failure.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::TransientTransport(e) | Self::TerminalTransport(e) => e.status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StorefrontError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return Self::from_status(status.as_u16(), error.to_string(), None);
        }

        let transport = TransportError {
            status: None,
            message: error.to_string(),
            request_id: None,
        };
        if error.is_connect() || error.is_timeout() {
            Self::TransientTransport(transport)
        } else {
            Self::TerminalTransport(transport)
        }
    }
}
