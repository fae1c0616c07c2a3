//! Structured errors for backend calls.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error category for a failed backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// Could not reach the backend (DNS, refused, reset)
    Connect,
    /// Connection or request timeout
    Timeout,
    /// HTTP status error (4xx, 5xx)
    HttpStatus,
    /// Response body was not the expected JSON
    Parse,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Connect => write!(f, "connect"),
            ApiErrorKind::Timeout => write!(f, "timeout"),
            ApiErrorKind::HttpStatus => write!(f, "http_status"),
            ApiErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Structured error from the backend client with kind and details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error category
    pub kind: ApiErrorKind,
    /// One-line summary suitable for logs
    pub message: String,
    /// Optional additional details (e.g., raw error body)
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an HTTP status error, lifting FastAPI's `detail` field when present.
    pub fn http_status(status: u16, body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Self::new(ApiErrorKind::HttpStatus, format!("HTTP {status}"));
        }

        let message = serde_json::from_str::<Value>(trimmed)
            .ok()
            .and_then(|json| json.get("detail").and_then(Value::as_str).map(str::to_string))
            .map_or_else(
                || format!("HTTP {status}"),
                |detail| format!("HTTP {status}: {detail}"),
            );

        Self {
            kind: ApiErrorKind::HttpStatus,
            message,
            details: Some(trimmed.to_string()),
        }
    }

    pub fn parse(message: impl Into<String>, body: &str) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: message.into(),
            details: (!body.is_empty()).then(|| body.to_string()),
        }
    }

    /// Classifies a transport error from reqwest.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ApiErrorKind::Timeout
        } else if err.is_decode() {
            ApiErrorKind::Parse
        } else {
            ApiErrorKind::Connect
        };
        Self::new(kind, err.to_string())
    }

    /// True when the backend could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self.kind, ApiErrorKind::Connect | ApiErrorKind::Timeout)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for backend operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_extracts_detail() {
        let err = ApiError::http_status(500, r#"{"detail":"model crashed"}"#);
        assert_eq!(err.kind, ApiErrorKind::HttpStatus);
        assert_eq!(err.message, "HTTP 500: model crashed");
        assert!(err.details.is_some());
        assert!(!err.is_unreachable());
    }

    #[test]
    fn test_http_status_plain_body() {
        let err = ApiError::http_status(502, "Bad Gateway");
        assert_eq!(err.message, "HTTP 502");
        assert_eq!(err.details.as_deref(), Some("Bad Gateway"));
    }

    #[test]
    fn test_unreachable_kinds() {
        assert!(ApiError::new(ApiErrorKind::Connect, "refused").is_unreachable());
        assert!(ApiError::new(ApiErrorKind::Timeout, "slow").is_unreachable());
        assert!(!ApiError::parse("bad json", "").is_unreachable());
    }
}
