//! Application service base
//!
//! Holds one unit of work and one logger for the duration of a
//! caller-facing operation and translates failures into the uniform result
//! envelope. This is the single place the error taxonomy collapses into its
//! two channels: the boundary status code for authorization failures, the
//! result envelope for everything else.

use std::sync::Arc;

use axum::http::StatusCode;

use super::boundary::RequestBoundary;
use crate::domain::errors::DataAccessError;
use crate::domain::result::{ErrorEnvelope, RequestResult};
use crate::infrastructure::context::SqlContext;

/// Error sink consumed by application services.
pub trait ErrorLogger: Send + Sync {
    fn write_error(&self, error: &DataAccessError);
}

/// Production sink writing through `tracing`.
#[derive(Default)]
pub struct TracingErrorLogger;

impl ErrorLogger for TracingErrorLogger {
    fn write_error(&self, error: &DataAccessError) {
        tracing::error!(error = %error, "data access operation failed");
    }
}

/// Caller-facing service base: one context, one logger, an optional
/// request boundary.
pub struct AppService {
    context: Arc<SqlContext>,
    logger: Arc<dyn ErrorLogger>,
    boundary: Option<Arc<dyn RequestBoundary>>,
}

impl AppService {
    pub fn new(context: Arc<SqlContext>, logger: Arc<dyn ErrorLogger>) -> Self {
        Self {
            context,
            logger,
            boundary: None,
        }
    }

    /// Attaches the request/response boundary used to signal authorization
    /// failures by status code.
    pub fn with_boundary(mut self, boundary: Arc<dyn RequestBoundary>) -> Self {
        self.boundary = Some(boundary);
        self
    }

    pub fn context(&self) -> &Arc<SqlContext> {
        &self.context
    }

    pub fn logger(&self) -> &Arc<dyn ErrorLogger> {
        &self.logger
    }

    /// Translates a failure into the uniform result envelope.
    ///
    /// The error is logged unconditionally. An authorization failure is
    /// routed to the boundary status channel and suppressed from the result
    /// as `Ok(None)`, so the caller checks the boundary status instead;
    /// with no boundary attached there is no other channel and the error is
    /// re-raised. Everything else becomes an error envelope carrying the
    /// error's message.
    pub fn handle_error<T>(
        &self,
        error: DataAccessError,
    ) -> Result<Option<RequestResult<T>>, DataAccessError> {
        self.logger.write_error(&error);

        if matches!(error, DataAccessError::Unauthorized(_)) {
            if let Some(boundary) = &self.boundary {
                boundary.set_status(StatusCode::UNAUTHORIZED);
                return Ok(None);
            }
            return Err(error);
        }

        Ok(Some(RequestResult::Error {
            error: ErrorEnvelope::from(&error),
        }))
    }
}
