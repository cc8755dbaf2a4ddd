//! Infrastructure layer - SeaORM-backed implementations
//!
//! This layer contains:
//! - Connection settings and backend selection (settings)
//! - Connector and unit-of-work context (context)
//! - The generic repository implementation (repository)
//! - Explicit service resolution (registry)

pub mod context;
pub mod registry;
pub mod repository;
pub mod settings;

pub use context::{SqlConnector, SqlContext};
pub use registry::ServiceRegistry;
pub use repository::SeaOrmRepository;
pub use settings::{DbSettings, SupportedProvider};
