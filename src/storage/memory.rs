//! In-process user storage.
//!
//! Mirrors the Redis hash layout (id -> encoded record) without a server, for
//! local development and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::User;
use crate::error::StorageResult;
use crate::storage::codec::{decode_entries, decode_user, encode_user};
use crate::storage::traits::UserStore;

/// In-memory user storage implementation.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    entries: DashMap<String, String>,
}

impl MemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn put(&self, user: &User) -> StorageResult<()> {
        let value = encode_user(user)?;
        self.entries.insert(user.id.clone(), value);
        Ok(())
    }

    async fn get(&self, id: &str) -> StorageResult<Option<User>> {
        // Clone the value out so the shard guard is released before decoding
        let raw = self.entries.get(id).map(|entry| entry.value().clone());
        raw.as_deref().map(decode_user).transpose()
    }

    async fn entries(&self) -> StorageResult<HashMap<String, User>> {
        let raw = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        Ok(decode_entries(raw))
    }

    async fn delete(&self, id: &str) -> StorageResult<bool> {
        Ok(self.entries.remove(id).is_some())
    }

    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: Some(name.to_string()),
            phone: None,
            email: Some(format!("{name}@example.com")),
        }
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let store = MemoryUserStore::new();
        let ann = user("u1", "ann");

        store.put(&ann).await.unwrap();
        assert_eq!(store.get("u1").await.unwrap(), Some(ann));
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = MemoryUserStore::new();
        store.put(&user("u1", "ann")).await.unwrap();
        store.put(&user("u1", "bob")).await.unwrap();

        let stored = store.get("u1").await.unwrap().unwrap();
        assert_eq!(stored.name.as_deref(), Some("bob"));
        assert_eq!(store.entries().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_entries_and_delete() {
        let store = MemoryUserStore::new();
        store.put(&user("u1", "ann")).await.unwrap();
        store.put(&user("u2", "bob")).await.unwrap();

        let all = store.entries().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all["u2"].name.as_deref(), Some("bob"));

        assert!(store.delete("u1").await.unwrap());
        assert!(!store.delete("u1").await.unwrap());
        assert_eq!(store.get("u1").await.unwrap(), None);
        assert_eq!(store.entries().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_backend_name() {
        let store = MemoryUserStore::new();
        assert_eq!(store.backend_name(), "memory");
        assert!(store.health_check().await.is_ok());
    }
}
