//! Error types surfaced by the API client.
//!
//! Transport failures (non-2xx or no response) share one type so callers can
//! branch on `status()` alone. Parse failures are kept separate.

use std::fmt;

use reqwest::{Method, StatusCode};
use thiserror::Error;

/// HTTP-level or network-level request failure.
///
/// `status` is `None` when no response was received at all.
#[derive(Debug)]
pub struct TransportError {
    pub method: Method,
    pub path: &'static str,
    pub status: Option<u16>,
    pub status_text: String,
    /// `detail` field of the backend's JSON error envelope, when present.
    pub detail: Option<String>,
    source: Option<reqwest::Error>,
}

impl TransportError {
    /// Failure for a response that arrived with a non-2xx status.
    pub fn from_status(
        method: Method,
        path: &'static str,
        status: StatusCode,
        detail: Option<String>,
    ) -> Self {
        Self {
            method,
            path,
            status: Some(status.as_u16()),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            detail,
            source: None,
        }
    }

    /// Failure where the request never produced a response.
    pub fn network(method: Method, path: &'static str, source: reqwest::Error) -> Self {
        Self {
            method,
            path,
            status: None,
            status_text: "network error".to_string(),
            detail: None,
            source: Some(source),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => {
                write!(
                    f,
                    "{} {} failed: HTTP {} {}",
                    self.method, self.path, code, self.status_text
                )?;
                if let Some(detail) = &self.detail {
                    write!(f, " ({})", detail)?;
                }
                Ok(())
            }
            None => match &self.source {
                Some(source) => write!(
                    f,
                    "{} {} failed: {}: {}",
                    self.method, self.path, self.status_text, source
                ),
                None => write!(f, "{} {} failed: {}", self.method, self.path, self.status_text),
            },
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Errors that can occur during API client operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response or no response at all
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Body is not JSON or does not match the documented shape
    #[error("Failed to parse response from {path}: {source}")]
    Parse {
        path: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The client's cancel token fired before the response arrived
    #[error("Request to {path} was cancelled")]
    Cancelled { path: &'static str },

    /// Base URL could not be parsed
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Payload could not be encoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// HTTP status code, if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport(e) => e.status,
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// Short machine-readable tag for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Transport(e) if e.status.is_some() => "http_error",
            ApiError::Transport(_) => "network_error",
            ApiError::Parse { .. } => "parse_error",
            ApiError::Cancelled { .. } => "cancelled",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::InvalidRequest(_) => "invalid_request",
        }
    }
}

/// Pull the `detail` string out of a backend error body like `{"detail": "Fund not found"}`.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
