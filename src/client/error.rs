//! Error types for Dryad API calls.

use thiserror::Error;

/// Transport-level failures talking to the Dryad API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("network error calling {url}: {source}")]
    Network {
        /// The request URL.
        url: String,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// Dryad answered with a non-success status.
    #[error("Dryad API returned HTTP {status} for {url}: {body}")]
    HttpStatus {
        /// The request URL.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// Response body (truncated), usually a JSON error document.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("unexpected Dryad API response from {url}: {source}")]
    Decode {
        /// The request URL.
        url: String,
        /// The underlying decode error.
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates an HTTP status error, keeping at most [`MAX_ERROR_BODY_CHARS`] of the body.
    pub fn http_status(url: impl Into<String>, status: u16, body: &str) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
            body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        }
    }

    /// Creates a decode error.
    pub fn decode(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }

    /// Returns the HTTP status when the failure came from an error response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Upper bound on how much of an error response body is kept for messages.
pub const MAX_ERROR_BODY_CHARS: usize = 512;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message_contains_status_and_url() {
        let err = ClientError::http_status("https://datadryad.org/api/v2/datasets", 422, "bad");
        let msg = err.to_string();
        assert!(msg.contains("422"), "should contain status");
        assert!(msg.contains("/api/v2/datasets"), "should contain url");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_http_status_truncates_long_body() {
        let body = "x".repeat(MAX_ERROR_BODY_CHARS * 2);
        let err = ClientError::http_status("u", 500, &body);
        match err {
            ClientError::HttpStatus { body, .. } => assert_eq!(body.len(), MAX_ERROR_BODY_CHARS),
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }
}
