//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! Every use case runs inside its own Unit of Work session.

mod user_service;

pub use user_service::{UserManager, UserService};
