//! Error types for the conversation crate.
//!
//! The turn store, retriever, and projector work over in-memory data and
//! cannot fail. Only calls that cross the backend boundary can, and those
//! return `BackendError` wrapped in a rootcause `Report`.

use std::fmt;

/// Errors from a context backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The backend could not be reached.
    Unavailable { reason: String },
    /// The backend rejected or failed a request.
    RequestFailed { reason: String },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => {
                write!(f, "context backend unavailable: {reason}")
            }
            Self::RequestFailed { reason } => {
                write!(f, "context backend request failed: {reason}")
            }
        }
    }
}

impl std::error::Error for BackendError {}
