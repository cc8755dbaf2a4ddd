//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelBehavior, Condition, EntityTrait, IntoActiveModel};

use super::DataAccessError;
use crate::infrastructure::context::SqlContext;

/// Object-safe binding/lifecycle surface shared by repositories and domain
/// services. This is the seam a domain service's registration list iterates
/// over, so heterogeneous members can live in one collection.
pub trait ContextBound: Send + Sync {
    /// Associates the member with a unit of work. Rebinding replaces the
    /// prior context.
    fn bind(&self, context: Arc<SqlContext>);

    /// Drops the held context handle. No-op when nothing is bound.
    fn release(&self);

    fn is_bound(&self) -> bool;
}

/// Generic CRUD + query contract over one entity type.
///
/// Every operation fails with [`DataAccessError::NotInitialized`] until the
/// repository has been bound to a context. Changes are staged inside the
/// bound unit of work; they become durable when the context commits.
#[async_trait]
pub trait Repository<E>: ContextBound
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Clone + Send + Sync,
    E::ActiveModel: ActiveModelBehavior + Send,
{
    /// Stages a new entity; returns the provider-populated model.
    async fn insert(&self, entity: E::ActiveModel) -> Result<E::Model, DataAccessError>;

    /// Stages a modification to an existing entity.
    async fn update(&self, entity: E::ActiveModel) -> Result<E::Model, DataAccessError>;

    /// Stages the removal of an entity; returns the removed model.
    async fn delete(&self, entity: E::Model) -> Result<E::Model, DataAccessError>;

    /// Lists entities matching the predicate. `None` matches every row.
    async fn list(&self, predicate: Option<Condition>) -> Result<Vec<E::Model>, DataAccessError>;
}
