//! User service - Handles user-related use cases.
//!
//! Turns "absent" store results into `NotFound` and wraps each
//! operation in a request-scoped session.

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;

use crate::domain::{NewUser, User, UserPatch};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{UnitOfWork, UserRepository};

/// Entity name used in `NotFound` messages.
const USER: &str = "User";

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users in store order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Create a user; the store assigns the id
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;

    /// Overwrite the fields present in `patch`
    async fn update_user(&self, id: i32, patch: UserPatch) -> AppResult<User>;

    /// Permanently delete user
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Run `op` inside a fresh session.
    ///
    /// The session is committed when `op` succeeds and rolled back
    /// otherwise, so it is released on every exit path.
    async fn scoped<T, F>(&self, op: F) -> AppResult<T>
    where
        F: for<'s> FnOnce(&'s dyn UserRepository) -> BoxFuture<'s, AppResult<T>> + Send,
        T: Send,
    {
        let session = self.uow.begin().await?;
        let outcome = op(session.users()).await;

        match outcome {
            Ok(value) => {
                session.commit().await?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = session.rollback().await {
                    tracing::error!("Session rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.scoped(|users| users.list()).await
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.scoped(move |users| {
            async move { users.find_by_id(id).await?.ok_or_not_found(USER) }.boxed()
        })
        .await
    }

    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        let user = self
            .scoped(move |users| users.insert(new_user))
            .await?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: i32, patch: UserPatch) -> AppResult<User> {
        let user = self
            .scoped(move |users| {
                async move { users.update(id, patch).await?.ok_or_not_found(USER) }.boxed()
            })
            .await?;

        tracing::info!(user_id = user.id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.scoped(move |users| {
            async move {
                if users.delete(id).await? {
                    Ok(())
                } else {
                    Err(AppError::not_found(USER))
                }
            }
            .boxed()
        })
        .await?;

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
