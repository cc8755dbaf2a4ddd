//! SeaORM implementation of the generic repository

use std::any::type_name;
use std::marker::PhantomData;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, Condition, EntityTrait, IntoActiveModel, LoaderTrait, QueryFilter,
    Related,
};

use super::context::SqlContext;
use crate::domain::repository::{ContextBound, Repository};
use crate::domain::DataAccessError;

/// Generic repository over one entity type, bound to a unit of work.
///
/// The context slot is interior so a shared repository instance can be
/// rebound per unit of work by whatever service owns it.
pub struct SeaOrmRepository<E: EntityTrait> {
    context: RwLock<Option<Arc<SqlContext>>>,
    entity: PhantomData<fn() -> E>,
}

impl<E: EntityTrait> SeaOrmRepository<E> {
    pub fn new() -> Self {
        Self {
            context: RwLock::new(None),
            entity: PhantomData,
        }
    }

    /// The currently bound context, if any. Identity-comparable so callers
    /// can verify that an aggregate shares one unit of work.
    pub fn bound_context(&self) -> Option<Arc<SqlContext>> {
        self.context
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn context(&self) -> Result<Arc<SqlContext>, DataAccessError> {
        self.bound_context()
            .ok_or_else(|| DataAccessError::NotInitialized(type_name::<E>().to_string()))
    }
}

impl<E: EntityTrait> Default for SeaOrmRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> ContextBound for SeaOrmRepository<E> {
    fn bind(&self, context: Arc<SqlContext>) {
        *self.context.write().unwrap_or_else(PoisonError::into_inner) = Some(context);
    }

    fn release(&self) {
        *self.context.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn is_bound(&self) -> bool {
        self.context
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

#[async_trait]
impl<E> Repository<E> for SeaOrmRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Clone + Send + Sync,
    E::ActiveModel: ActiveModelBehavior + Send,
{
    async fn insert(&self, entity: E::ActiveModel) -> Result<E::Model, DataAccessError> {
        let context = self.context()?;
        let handle = context.acquire().await;
        let model = entity.insert(handle.conn()?).await?;
        Ok(model)
    }

    async fn update(&self, entity: E::ActiveModel) -> Result<E::Model, DataAccessError> {
        let context = self.context()?;
        let handle = context.acquire().await;
        let model = entity.update(handle.conn()?).await?;
        Ok(model)
    }

    async fn delete(&self, entity: E::Model) -> Result<E::Model, DataAccessError> {
        let context = self.context()?;
        let handle = context.acquire().await;
        E::delete(entity.clone().into_active_model())
            .exec(handle.conn()?)
            .await?;
        Ok(entity)
    }

    async fn list(&self, predicate: Option<Condition>) -> Result<Vec<E::Model>, DataAccessError> {
        let context = self.context()?;
        let handle = context.acquire().await;
        let mut query = E::find();
        if let Some(condition) = predicate {
            query = query.filter(condition);
        }
        Ok(query.all(handle.conn()?).await?)
    }
}

impl<E> SeaOrmRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Clone + Send + Sync,
    E::ActiveModel: ActiveModelBehavior + Send,
{
    /// As [`Repository::list`], additionally eager-loading the related
    /// entity `R` for every returned row. Rows with no related entities get
    /// an empty collection. `None` matches every row, same as `list`.
    pub async fn list_with_related<R>(
        &self,
        predicate: Option<Condition>,
    ) -> Result<Vec<(E::Model, Vec<R::Model>)>, DataAccessError>
    where
        R: EntityTrait,
        E: Related<R>,
        R::Model: Send + Sync,
    {
        let context = self.context()?;
        let handle = context.acquire().await;
        let conn = handle.conn()?;

        let mut query = E::find();
        if let Some(condition) = predicate {
            query = query.filter(condition);
        }
        let models = query.all(conn).await?;
        let related = models.load_many(R::find(), conn).await?;
        Ok(models.into_iter().zip(related).collect())
    }
}
