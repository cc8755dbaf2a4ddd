//! Request/response boundary
//!
//! Authorization failures are signaled through the response status rather
//! than the result envelope. The boundary is the seam the application
//! service writes that status through.

use std::sync::atomic::{AtomicU16, Ordering};

use axum::http::StatusCode;

/// Mutable response-status surface of the current request.
pub trait RequestBoundary: Send + Sync {
    fn set_status(&self, status: StatusCode);
}

/// Boundary adapter for HTTP handlers: the service writes the status here,
/// middleware reads it back after the operation and applies it to the
/// response.
#[derive(Default)]
pub struct HttpBoundary {
    // 0 = no status written yet
    status: AtomicU16,
}

impl HttpBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self.status.load(Ordering::Acquire) {
            0 => None,
            code => StatusCode::from_u16(code).ok(),
        }
    }
}

impl RequestBoundary for HttpBoundary {
    fn set_status(&self, status: StatusCode) {
        self.status.store(status.as_u16(), Ordering::Release);
    }
}
