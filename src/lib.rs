pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports so embedding applications can pull the whole surface from the
// crate root.
pub use domain::errors::DataAccessError;
pub use domain::repository::{ContextBound, Repository};
pub use domain::result::{ErrorEnvelope, ErrorKind, RequestResult};
pub use infrastructure::context::{SqlConnector, SqlContext};
pub use infrastructure::registry::ServiceRegistry;
pub use infrastructure::repository::SeaOrmRepository;
pub use infrastructure::settings::{DbSettings, SupportedProvider};
pub use services::app_service::{AppService, ErrorLogger, TracingErrorLogger};
pub use services::boundary::{HttpBoundary, RequestBoundary};
pub use services::domain_service::{DomainService, ServiceMembers};
