//! Error types surfaced by the retry engine.

use std::fmt;

/// Failure returned by the HTTP retry path.
#[derive(Debug)]
pub enum HttpRetryError<E> {
    /// The operation failed before producing a response. Never retried.
    Transport(E),
    /// Last response was not a success and no retry applied (or retries ran out).
    Status { code: u16, status: String },
}

impl<E> HttpRetryError<E> {
    /// Status code of the final response, if one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            HttpRetryError::Transport(_) => None,
            HttpRetryError::Status { code, .. } => Some(*code),
        }
    }
}

impl<E: fmt::Display> fmt::Display for HttpRetryError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpRetryError::Transport(e) => write!(f, "{}", e),
            HttpRetryError::Status { code, status } => {
                write!(f, "ERROR: httpStatusCode: {}, httpStatus: {}", code, status)
            }
        }
    }
}

impl<E> std::error::Error for HttpRetryError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HttpRetryError::Transport(e) => Some(e),
            HttpRetryError::Status { .. } => None,
        }
    }
}

/// A policy set name that the catalog does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown policy set: {0}")]
pub struct UnknownPolicySet(pub String);
