//! Storage configuration.

use config::ConfigError;
use serde::Deserialize;

/// Storage backend type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Redis hash storage.
    #[default]
    Redis,
    /// In-process storage (development/tests).
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Redis => write!(f, "redis"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Storage backend type.
    #[serde(default)]
    pub backend: StorageBackend,

    /// Redis storage configuration.
    #[serde(default)]
    pub redis: RedisStorageConfig,
}

impl StorageConfig {
    /// Validate the storage configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration fields are missing for the selected backend.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.backend {
            StorageBackend::Memory => Ok(()),
            StorageBackend::Redis => {
                if self.redis.url.is_empty() {
                    return Err(ConfigError::Message(
                        "storage.redis.url cannot be empty".to_string(),
                    ));
                }
                if self.redis.pool_size == 0 {
                    return Err(ConfigError::Message(
                        "storage.redis.pool_size cannot be 0".to_string(),
                    ));
                }
                if self.redis.connect_timeout == 0 {
                    return Err(ConfigError::Message(
                        "storage.redis.connect_timeout cannot be 0".to_string(),
                    ));
                }
                if self.redis.hash_key.is_empty() {
                    return Err(ConfigError::Message(
                        "storage.redis.hash_key cannot be empty".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Redis storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RedisStorageConfig {
    /// Redis connection URL.
    #[serde(default = "default_redis_url")]
    pub url: String,

    /// Connection pool size.
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,

    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Hash key holding every user record.
    #[serde(default = "default_hash_key")]
    pub hash_key: String,
}

fn default_redis_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

const fn default_pool_size() -> usize {
    16
}

const fn default_connect_timeout() -> u64 {
    5
}

fn default_hash_key() -> String {
    "User".to_string()
}

impl Default for RedisStorageConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            pool_size: default_pool_size(),
            connect_timeout: default_connect_timeout(),
            hash_key: default_hash_key(),
        }
    }
}
