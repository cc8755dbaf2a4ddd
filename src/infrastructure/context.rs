//! Database connector and unit of work

use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, TransactionTrait,
};
use tokio::sync::{Mutex, MutexGuard, OnceCell};

use super::settings::DbSettings;
use crate::domain::DataAccessError;

/// Owns the connection settings and a lazily-established provider handle.
/// Driver selection happens exactly once, on first use.
pub struct SqlConnector {
    settings: DbSettings,
    connection: OnceCell<DatabaseConnection>,
}

impl SqlConnector {
    pub fn new(settings: DbSettings) -> Self {
        Self {
            settings,
            connection: OnceCell::new(),
        }
    }

    pub fn settings(&self) -> &DbSettings {
        &self.settings
    }

    /// Raw provider handle. Escape hatch for migrations and raw statements;
    /// everything else goes through a [`SqlContext`].
    pub async fn connection(&self) -> Result<&DatabaseConnection, DataAccessError> {
        self.connection
            .get_or_try_init(|| async {
                let mut options = ConnectOptions::new(self.settings.resolved_url());
                if let Some(max) = self.settings.max_connections() {
                    options.max_connections(max);
                }
                Database::connect(options)
                    .await
                    .map_err(DataAccessError::from)
            })
            .await
    }

    /// Opens a new unit of work.
    pub async fn begin(&self) -> Result<SqlContext, DataAccessError> {
        let connection = self.connection().await?;
        let txn = connection.begin().await?;
        Ok(SqlContext {
            txn: Mutex::new(Some(txn)),
        })
    }
}

/// One unit of work against the database.
///
/// Every repository bound to this context executes inside the same provider
/// transaction; staged changes are invisible to other contexts until
/// [`SqlContext::commit`]. Dropping an uncommitted context rolls them back.
///
/// Interior access is serialized: one logical operation at a time. Callers
/// issuing concurrent operations against one context get no ordering
/// guarantees.
pub struct SqlContext {
    txn: Mutex<Option<DatabaseTransaction>>,
}

impl SqlContext {
    /// Exclusive access to the transaction for one repository operation.
    pub(crate) async fn acquire(&self) -> ContextHandle<'_> {
        ContextHandle {
            guard: self.txn.lock().await,
        }
    }

    /// Makes the staged changes durable. Any later operation on this
    /// context fails with [`DataAccessError::ContextClosed`].
    pub async fn commit(&self) -> Result<(), DataAccessError> {
        let txn = self
            .txn
            .lock()
            .await
            .take()
            .ok_or(DataAccessError::ContextClosed)?;
        txn.commit().await?;
        Ok(())
    }

    /// Discards the staged changes.
    pub async fn rollback(&self) -> Result<(), DataAccessError> {
        let txn = self
            .txn
            .lock()
            .await
            .take()
            .ok_or(DataAccessError::ContextClosed)?;
        txn.rollback().await?;
        Ok(())
    }

    pub async fn is_open(&self) -> bool {
        self.txn.lock().await.is_some()
    }
}

pub(crate) struct ContextHandle<'a> {
    guard: MutexGuard<'a, Option<DatabaseTransaction>>,
}

impl ContextHandle<'_> {
    pub(crate) fn conn(&self) -> Result<&DatabaseTransaction, DataAccessError> {
        self.guard.as_ref().ok_or(DataAccessError::ContextClosed)
    }
}
