//! Unit of Work pattern implementation.
//!
//! Every use case runs inside one `Session`: a database transaction
//! taken from the pool when the call starts and released when it ends.
//!
//! - `commit` on success
//! - `rollback` on error
//! - a session dropped without either is rolled back by SeaORM and its
//!   connection returned to the pool

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::repositories::{UserRepository, UserStore};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Acquire a session scoped to a single use case.
    async fn begin(&self) -> AppResult<Box<dyn Session>>;
}

/// Request-scoped store access.
///
/// Repository calls made through a session share its transaction.
#[async_trait]
pub trait Session: Send + Sync {
    /// User repository bound to this session
    fn users(&self) -> &dyn UserRepository;

    /// Make the session's writes durable and release it.
    async fn commit(self: Box<Self>) -> AppResult<()>;

    /// Discard the session's writes and release it.
    async fn rollback(self: Box<Self>) -> AppResult<()>;
}

/// Concrete implementation of UnitOfWork over the SeaORM pool.
pub struct Persistence {
    db: DatabaseConnection,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    async fn begin(&self) -> AppResult<Box<dyn Session>> {
        let txn = self.db.begin().await.map_err(AppError::from)?;
        Ok(Box::new(TransactionSession {
            users: UserStore::new(txn),
        }))
    }
}

/// Session backed by a database transaction.
struct TransactionSession {
    users: UserStore<DatabaseTransaction>,
}

#[async_trait]
impl Session for TransactionSession {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.users.into_inner().commit().await.map_err(AppError::from)
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        self.users.into_inner().rollback().await.map_err(AppError::from)
    }
}
