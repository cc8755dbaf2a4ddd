//! Data-access error types
//!
//! These errors represent persistence-level failures. Classification happens
//! structurally (by variant), never by inspecting type names or message
//! contents.

use std::fmt;

#[derive(Debug)]
pub enum DataAccessError {
    /// Repository operation invoked before a context was bound; carries the
    /// repository's type name. Always a programming defect.
    NotInitialized(String),
    /// Operation against a unit of work that was already committed or
    /// rolled back.
    ContextClosed,
    /// Validation error with message
    Validation(String),
    /// Authorization failure; routed to the boundary status channel by the
    /// application service
    Unauthorized(String),
    /// Database/persistence error
    Database(String),
    /// Generic internal error
    Internal(String),
}

impl fmt::Display for DataAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataAccessError::NotInitialized(name) => {
                write!(f, "Repository {} has not been initialized", name)
            }
            DataAccessError::ContextClosed => write!(f, "Unit of work already completed"),
            DataAccessError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DataAccessError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            DataAccessError::Database(msg) => write!(f, "Database error: {}", msg),
            DataAccessError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DataAccessError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DataAccessError {
    fn from(e: sea_orm::DbErr) -> Self {
        DataAccessError::Database(e.to_string())
    }
}
