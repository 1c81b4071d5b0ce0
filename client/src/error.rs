//! The uniform error surfaced by every remote operation.
//!
//! # Design
//! Callers only ever see one kind of failure: a `ServerError` carrying the
//! upstream message when one exists. Transport failures, non-success HTTP
//! statuses, and undecodable bodies are deliberately not distinguished — the
//! caller's recovery is the same for all of them (show a message, optionally
//! revert an optimistic mutation). Every failure funnels through a
//! constructor here, which logs the raw error before wrapping it.

/// Uniform failure for any todo API operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .message.as_deref().unwrap_or("Server error"))]
pub struct ServerError {
    /// The upstream error message, when the failure produced one.
    pub message: Option<String>,
}

impl ServerError {
    /// Wrap a message, treating an empty string as "no message".
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message: (!message.is_empty()).then_some(message),
        }
    }

    /// Normalize a transport or decoding error: log it raw, keep its message.
    pub(crate) fn from_error(err: &dyn std::error::Error) -> Self {
        tracing::error!(error = %err, "todo API call failed");
        Self::new(err.to_string())
    }

    /// Normalize an unexpected HTTP status: log it with the response body.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        tracing::error!(status, body, "todo API returned an error response");
        if body.trim().is_empty() {
            Self::new(format!("HTTP {status}"))
        } else {
            Self::new(format!("HTTP {status}: {body}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_upstream_message() {
        let err = ServerError::new("connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn falls_back_to_generic_message() {
        let err = ServerError::new("");
        assert!(err.message.is_none());
        assert_eq!(err.to_string(), "Server error");
    }

    #[test]
    fn status_errors_include_body_when_present() {
        let err = ServerError::from_status(500, "boom");
        assert_eq!(err.to_string(), "HTTP 500: boom");
        let err = ServerError::from_status(404, "");
        assert_eq!(err.to_string(), "HTTP 404");
    }
}
