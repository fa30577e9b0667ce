//! Service layer module.
//!
//! Business logic between the HTTP handlers and the storage backend.

pub mod user;

pub use user::UserService;
