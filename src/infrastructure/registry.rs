//! Explicit service resolution
//!
//! A type-indexed registry replacing a process-wide service locator: built
//! and owned by whoever assembles the application, consulted explicitly.
//! Resolving a repository or domain service binds it to the supplied
//! context on the way out.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use sea_orm::EntityTrait;

use super::context::SqlContext;
use super::repository::SeaOrmRepository;
use crate::domain::repository::ContextBound;
use crate::services::domain_service::DomainService;

#[derive(Default)]
pub struct ServiceRegistry {
    entries: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: Send + Sync + 'static>(&mut self, service: Arc<T>) {
        self.entries.insert(TypeId::of::<T>(), service);
    }

    pub fn resolve<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| Arc::clone(entry).downcast::<T>().ok())
    }

    /// Resolves the repository registered for `E` and binds it to
    /// `context`.
    pub fn repository<E>(&self, context: &Arc<SqlContext>) -> Option<Arc<SeaOrmRepository<E>>>
    where
        E: EntityTrait,
    {
        let repository = self.resolve::<SeaOrmRepository<E>>()?;
        repository.bind(Arc::clone(context));
        Some(repository)
    }

    /// Resolves a domain service and propagates `context` through its
    /// registered members.
    pub fn domain_service<S>(&self, context: &Arc<SqlContext>) -> Option<Arc<S>>
    where
        S: DomainService + 'static,
    {
        let service = self.resolve::<S>()?;
        service.bind(Arc::clone(context));
        Some(service)
    }
}
