//! User record service.
//!
//! Assigns ids on creation and turns store absence into an explicit not-found.

use std::sync::Arc;

use metrics::counter;
use tracing::{debug, info};

use crate::domain::{NewUser, User};
use crate::error::{AppError, Result};
use crate::storage::UserStore;

/// Service for user record operations.
pub struct UserService {
    /// Storage backend.
    storage: Arc<dyn UserStore>,
}

impl UserService {
    /// Create a new user service.
    pub fn new(storage: Arc<dyn UserStore>) -> Self {
        Self { storage }
    }

    /// Create a user with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub async fn create(&self, new_user: NewUser) -> Result<User> {
        counter!("user_store_requests_total", "op" => "create").increment(1);

        let user = User::create(new_user);
        self.storage.put(&user).await?;

        info!(id = %user.id, "User created");
        Ok(user)
    }

    /// Get a user by id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no user has this id, or an error if storage fails.
    pub async fn get(&self, id: &str) -> Result<User> {
        counter!("user_store_requests_total", "op" => "get").increment(1);

        match self.storage.get(id).await? {
            Some(user) => Ok(user),
            None => {
                counter!("user_store_not_found_total").increment(1);
                Err(AppError::NotFound(id.to_string()))
            }
        }
    }

    /// List every stored user. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub async fn list(&self) -> Result<Vec<User>> {
        counter!("user_store_requests_total", "op" => "list").increment(1);

        let users: Vec<User> = self.storage.entries().await?.into_values().collect();
        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    /// Delete a user by id. Deleting an unknown id succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub async fn delete(&self, id: &str) -> Result<()> {
        counter!("user_store_requests_total", "op" => "delete").increment(1);

        let removed = self.storage.delete(id).await?;
        info!(id, removed, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::storage::MemoryUserStore;

    fn service() -> UserService {
        UserService::new(Arc::new(MemoryUserStore::new()))
    }

    fn ann() -> NewUser {
        NewUser {
            name: Some("Ann".to_string()),
            phone: Some("555".to_string()),
            email: Some("a@x.com".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = service();

        let created = service.create(ann()).await.unwrap();
        assert!(!created.id.is_empty());

        let fetched = service.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name.as_deref(), Some("Ann"));
        assert_eq!(fetched.phone.as_deref(), Some("555"));
        assert_eq!(fetched.email.as_deref(), Some("a@x.com"));
    }

    #[tokio::test]
    async fn test_identical_creates_get_distinct_ids() {
        let service = service();

        let a = service.create(ann()).await.unwrap();
        let b = service.create(ann()).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let service = service();

        let result = service.get("never-created").await;
        assert!(matches!(result, Err(AppError::NotFound(id)) if id == "never-created"));
    }

    #[tokio::test]
    async fn test_list_returns_all_created() {
        let service = service();

        let mut expected = HashSet::new();
        for name in ["A", "B", "C"] {
            let user = service
                .create(NewUser {
                    name: Some(name.to_string()),
                    ..Default::default()
                })
                .await
                .unwrap();
            expected.insert(user.id);
        }

        let listed: HashSet<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(listed, expected);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let service = service();
        let user = service.create(ann()).await.unwrap();

        service.delete(&user.id).await.unwrap();
        service.delete(&user.id).await.unwrap();

        assert!(matches!(
            service.get(&user.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(service.list().await.unwrap().is_empty());
    }
}
