//! Users API - CRUD service for a single `users` table.
//!
//! Exposes create/read/update/delete over HTTP with JSON bodies,
//! backed by a relational table through SeaORM.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User entity and its wire projections
//! - **services**: Use cases (request-scoped store access)
//! - **infra**: Database connection, migrations, repositories, sessions
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{NewUser, User, UserPatch, UserResponse};
pub use errors::{AppError, AppResult};
