//! Application state - Dependency injection container.
//!
//! Shared by every handler; holds no per-request data.

use std::sync::Arc;

use crate::infra::{Database, Persistence};
use crate::services::{UserManager, UserService};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the user service to the database through the Unit of Work.
    pub fn from_database(database: Arc<Database>) -> Self {
        let uow = Arc::new(Persistence::new(database.get_connection()));
        let user_service = Arc::new(UserManager::new(uow));

        Self {
            user_service,
            database,
        }
    }
}
