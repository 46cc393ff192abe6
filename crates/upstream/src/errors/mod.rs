//! Error types for upstream gateway calls.
//!
//! All failure conditions of a single upstream call collapse into
//! [`GatewayError`]. Callers that only care about "did it work" treat every
//! variant the same; [`GatewayError::upstream_message`] exposes the message
//! the upstream supplied, when it supplied one.

use thiserror::Error;

/// Errors that can occur while calling an upstream service.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("Request to {endpoint} failed: {message}")]
    Transport {
        /// The endpoint that was called
        endpoint: String,
        /// The transport error description
        message: String,
    },

    /// The upstream answered with a non-2xx status.
    #[error("Upstream {endpoint} returned status {status}")]
    Status {
        /// The endpoint that was called
        endpoint: String,
        /// The HTTP status code returned
        status: u16,
    },

    /// The upstream answered 2xx but flagged `error: true` in its body.
    #[error("Upstream {endpoint} rejected the request: {message}")]
    Rejected {
        /// The endpoint that was called
        endpoint: String,
        /// The `msg` field of the upstream envelope
        message: String,
    },

    /// The body could not be decoded into the expected shape.
    #[error("Failed to decode response from {endpoint}: {message}")]
    Decode {
        /// The endpoint that was called
        endpoint: String,
        /// The decoder error description
        message: String,
    },
}

impl GatewayError {
    /// The endpoint URL that produced this failure.
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Rejected { endpoint, .. }
            | Self::Decode { endpoint, .. } => endpoint,
        }
    }

    /// The message supplied by the upstream itself, if any.
    ///
    /// Only business-level rejections carry one; transport and decode
    /// failures are described by us, not by the upstream.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    pub(crate) fn transport(endpoint: &str, err: reqwest::Error) -> Self {
        Self::Transport {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn decode(endpoint: &str, err: impl std::fmt::Display) -> Self {
        Self::Decode {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        }
    }
}
