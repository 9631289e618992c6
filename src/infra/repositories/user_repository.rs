//! User repository: single-row CRUD over the `users` table.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, SqlErr,
};

use super::entities::user::{ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User, UserPatch};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Store contract consumed by the user service.
///
/// Every operation touches at most one row. "Absent" is reported as
/// `None`/`false` and left to the caller to turn into `NotFound`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; the store assigns the id.
    ///
    /// Fails with `Conflict` when the email is already taken.
    async fn insert(&self, new_user: NewUser) -> AppResult<User>;

    /// Find user by primary key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// All users in store order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Overwrite the fields present in `patch`.
    ///
    /// Returns `None` when no row has `id`; `Conflict` on email collision.
    async fn update(&self, id: i32, patch: UserPatch) -> AppResult<Option<User>>;

    /// Hard delete. Returns `false` when no row has `id`.
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// SeaORM-backed repository.
///
/// Generic over the connection so the same code runs on the pool or
/// inside a request-scoped transaction.
pub struct UserStore<C = DatabaseConnection>
where
    C: ConnectionTrait,
{
    conn: C,
}

impl<C> UserStore<C>
where
    C: ConnectionTrait,
{
    /// Create new repository instance
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    /// Give back the underlying connection (used to commit a transaction).
    pub fn into_inner(self) -> C {
        self.conn
    }
}

#[async_trait]
impl<C> UserRepository for UserStore<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn insert(&self, new_user: NewUser) -> AppResult<User> {
        let active: ActiveModel = new_user.into();
        let model = active.insert(&self.conn).await.map_err(map_write_err)?;
        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.conn).await?;
        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find().all(&self.conn).await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: i32, patch: UserPatch) -> AppResult<Option<User>> {
        let Some(model) = UserEntity::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(User::from(model)));
        }

        let mut active: ActiveModel = model.into();
        active.apply_patch(patch);

        let model = active.update(&self.conn).await.map_err(map_write_err)?;
        Ok(Some(User::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = UserEntity::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }
}

/// Translate the unique index violation on `email` into `Conflict`.
fn map_write_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(%detail, "Unique constraint violated");
            AppError::conflict("Email")
        }
        _ => AppError::from(err),
    }
}
