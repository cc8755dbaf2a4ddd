//! Request result envelope
//!
//! The uniform return shape of application-service operations: either a
//! success payload or an error description. Serializable so HTTP handlers
//! can hand it straight to the response body.

use serde::{Deserialize, Serialize};

use super::DataAccessError;

/// Boundary-facing error classification. The internal taxonomy collapses
/// onto these three kinds when an error leaves the service layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Unauthorized,
    Internal,
}

/// Error payload carried by a failed [`RequestResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&DataAccessError> for ErrorEnvelope {
    fn from(error: &DataAccessError) -> Self {
        let kind = match error {
            DataAccessError::Validation(_) => ErrorKind::Validation,
            DataAccessError::Unauthorized(_) => ErrorKind::Unauthorized,
            _ => ErrorKind::Internal,
        };
        ErrorEnvelope {
            kind,
            message: error.to_string(),
        }
    }
}

/// Tagged success/error wrapper returned from application-service
/// operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RequestResult<T> {
    Success { data: T },
    Error { error: ErrorEnvelope },
}

impl<T> RequestResult<T> {
    pub fn success(data: T) -> Self {
        RequestResult::Success { data }
    }

    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        RequestResult::Error {
            error: ErrorEnvelope {
                kind,
                message: message.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RequestResult::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RequestResult::Success { data } => Some(data),
            RequestResult::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorEnvelope> {
        match self {
            RequestResult::Success { .. } => None,
            RequestResult::Error { error } => Some(error),
        }
    }
}
