use serde::{Deserialize, Serialize};
use std::fmt;

/// Generic message shown for any connectivity failure. The backend's own
/// error text is only surfaced when a response actually arrived.
pub const NETWORK_ERROR_MESSAGE: &str = "Could not reach the server. Please try again.";

/// Categorization of client-side application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Transport-level failure; no response was received.
    Network,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppErrorKind::Network => "Network",
            AppErrorKind::BadRequest => "BadRequest",
            AppErrorKind::Unauthorized => "Unauthorized",
            AppErrorKind::Forbidden => "Forbidden",
            AppErrorKind::NotFound => "NotFound",
            AppErrorKind::InternalError => "InternalError",
        };
        f.write_str(s)
    }
}

/// Structured error surfaced by the API client and rendered by pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

/// Error payload the backend returns on non-2xx responses.
#[derive(Debug, Deserialize)]
struct BackendError {
    error: String,
}

impl AppError {
    pub fn network() -> Self {
        Self {
            kind: AppErrorKind::Network,
            message: NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Unauthorized,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
        }
    }

    /// Build an error from an HTTP status and response body.
    ///
    /// The backend wraps failures as `{"error": "..."}`; when that parse
    /// fails the status alone decides the kind and a generic message is
    /// used so raw HTML error pages never leak into the UI.
    pub fn from_response(status: u16, body: &str) -> Self {
        let kind = match status {
            400 | 422 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            _ => AppErrorKind::InternalError,
        };
        let message = serde_json::from_str::<BackendError>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| "Something went wrong. Please try again.".to_string());
        Self { kind, message }
    }

    /// True when the session should be discarded in response to this error.
    pub fn invalidates_session(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
