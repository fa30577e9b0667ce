//! Storage trait definitions.
//!
//! The user store is a single hash namespace: one top-level key whose fields are
//! user ids and whose values are serialized user records.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::User;
use crate::error::StorageResult;

/// Hash-backed user record storage.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert or overwrite the record stored under `user.id`.
    async fn put(&self, user: &User) -> StorageResult<()>;

    /// Get the record stored under `id`.
    ///
    /// Returns `None` if no such field exists in the namespace.
    async fn get(&self, id: &str) -> StorageResult<Option<User>>;

    /// Get every record in the namespace, keyed by id.
    async fn entries(&self) -> StorageResult<HashMap<String, User>>;

    /// Remove the record stored under `id`.
    ///
    /// Returns whether a record was removed. Removing a missing id is not an error.
    async fn delete(&self, id: &str) -> StorageResult<bool>;

    /// Check if the storage backend is healthy and reachable.
    async fn health_check(&self) -> StorageResult<()>;

    /// Get the storage backend name.
    fn backend_name(&self) -> &'static str;
}
