//! Domain service context propagation and lifecycle
//!
//! A domain service groups repositories and nested services that must
//! always operate against one shared unit of work. Members are declared
//! explicitly at construction; binding and disposal iterate that list
//! exhaustively, so an aggregate can never end up split across two contexts
//! mid-operation.

use std::sync::Arc;

use crate::domain::repository::ContextBound;
use crate::infrastructure::context::SqlContext;

/// Marker for service aggregates. A domain service is itself bindable and
/// disposable, so services nest.
pub trait DomainService: ContextBound {}

/// The explicit, ordered registration list a domain service builds in its
/// constructor. A member left out of the list is a defect in that
/// constructor.
#[derive(Default)]
pub struct ServiceMembers {
    members: Vec<Arc<dyn ContextBound>>,
}

impl ServiceMembers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration for constructors.
    pub fn with(mut self, member: Arc<dyn ContextBound>) -> Self {
        self.members.push(member);
        self
    }

    pub fn register(&mut self, member: Arc<dyn ContextBound>) {
        self.members.push(member);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl ContextBound for ServiceMembers {
    /// Binds the same context to every registered member; repositories
    /// rebind, nested services recurse.
    fn bind(&self, context: Arc<SqlContext>) {
        for member in &self.members {
            member.bind(Arc::clone(&context));
        }
    }

    /// Releases every member. Never-bound members are a no-op, so a
    /// partially-initialized service disposes cleanly.
    fn release(&self) {
        for member in &self.members {
            member.release();
        }
    }

    fn is_bound(&self) -> bool {
        self.members.iter().all(|member| member.is_bound())
    }
}
