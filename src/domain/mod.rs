//! Domain models for the user store.

pub mod user;

pub use user::{NewUser, User, generate_user_id};
