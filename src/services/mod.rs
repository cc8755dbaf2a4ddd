//! Services Layer
//!
//! Domain-service context propagation and the application-service boundary.

pub mod app_service;
pub mod boundary;
pub mod domain_service;

pub use app_service::{AppService, ErrorLogger, TracingErrorLogger};
pub use boundary::{HttpBoundary, RequestBoundary};
pub use domain_service::{DomainService, ServiceMembers};
