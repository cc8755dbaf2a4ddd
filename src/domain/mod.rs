//! Domain layer - Contracts shared by every data-access consumer
//!
//! Error taxonomy, the request/response result envelope, and the repository
//! traits. Implementations live in the infrastructure layer.

pub mod errors;
pub mod repository;
pub mod result;

pub use errors::DataAccessError;
pub use repository::{ContextBound, Repository};
pub use result::{ErrorEnvelope, ErrorKind, RequestResult};
