//! Storage backend factory.
//!
//! Creates the appropriate storage backend based on configuration.

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::AppError;
use crate::storage::memory::MemoryUserStore;
use crate::storage::redis::RedisUserStore;
use crate::storage::traits::UserStore;

/// Create a storage backend based on configuration.
///
/// # Arguments
///
/// * `config` - Storage configuration
///
/// # Returns
///
/// An `Arc<dyn UserStore>` pointing to the configured storage backend.
///
/// # Errors
///
/// Returns an error if the storage backend cannot be initialized or is unreachable.
pub async fn create_storage(config: &StorageConfig) -> Result<Arc<dyn UserStore>, AppError> {
    let storage: Arc<dyn UserStore> = match config.backend {
        StorageBackend::Redis => Arc::new(RedisUserStore::new(&config.redis)?),
        StorageBackend::Memory => Arc::new(MemoryUserStore::new()),
    };

    // Verify storage is healthy
    storage.health_check().await?;

    Ok(storage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RedisStorageConfig;

    #[tokio::test]
    async fn test_create_memory_storage() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            ..Default::default()
        };

        let storage = create_storage(&config).await.unwrap();
        assert_eq!(storage.backend_name(), "memory");
    }

    #[tokio::test]
    async fn test_create_redis_storage_unreachable() {
        let config = StorageConfig {
            backend: StorageBackend::Redis,
            redis: RedisStorageConfig {
                url: "redis://127.0.0.1:1".to_string(),
                connect_timeout: 1,
                ..Default::default()
            },
        };

        let result = create_storage(&config).await;
        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
