//! Domain layer - Core business entities
//!
//! The user entity and the projections exchanged with clients
//! and with the store. No infrastructure dependencies.

pub mod user;

pub use user::{NewUser, User, UserPatch, UserResponse};
