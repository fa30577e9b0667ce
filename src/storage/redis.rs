//! Redis hash user storage.
//!
//! All records live in one hash (`HSET`/`HGET`/`HGETALL`/`HDEL`) whose key is
//! the configured namespace.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use deadpool_redis::redis::{self, AsyncCommands};
use deadpool_redis::{Config, Connection, Pool, PoolConfig, Runtime};
use tracing::debug;

use crate::config::RedisStorageConfig;
use crate::domain::User;
use crate::error::{StorageError, StorageResult};
use crate::storage::codec::{decode_entries, decode_user, encode_user};
use crate::storage::traits::UserStore;

/// Redis-backed user storage over a shared connection pool.
pub struct RedisUserStore {
    pool: Pool,
    hash_key: String,
}

impl RedisUserStore {
    /// Build the connection pool described by `config`.
    ///
    /// No connection is opened until the first command; call
    /// [`UserStore::health_check`] to verify reachability.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the pool cannot be built.
    pub fn new(config: &RedisStorageConfig) -> StorageResult<Self> {
        let timeout = Some(Duration::from_secs(config.connect_timeout));

        let mut limits = PoolConfig::new(config.pool_size);
        limits.timeouts.wait = timeout;
        limits.timeouts.create = timeout;
        limits.timeouts.recycle = timeout;

        let mut pool_config = Config::from_url(config.url.as_str());
        pool_config.pool = Some(limits);

        let pool = pool_config.create_pool(Some(Runtime::Tokio1))?;

        Ok(Self::with_pool(pool, config.hash_key.clone()))
    }

    /// Wrap an existing pool.
    #[must_use]
    pub const fn with_pool(pool: Pool, hash_key: String) -> Self {
        Self { pool, hash_key }
    }

    /// Namespace key holding every record.
    #[must_use]
    pub fn hash_key(&self) -> &str {
        &self.hash_key
    }

    async fn connection(&self) -> StorageResult<Connection> {
        Ok(self.pool.get().await?)
    }
}

#[async_trait]
impl UserStore for RedisUserStore {
    async fn put(&self, user: &User) -> StorageResult<()> {
        let value = encode_user(user)?;
        let mut conn = self.connection().await?;

        let _: () = conn
            .hset(self.hash_key.as_str(), user.id.as_str(), value)
            .await?;
        debug!(key = %self.hash_key, id = %user.id, "HSET user");
        Ok(())
    }

    async fn get(&self, id: &str) -> StorageResult<Option<User>> {
        let mut conn = self.connection().await?;

        let raw: Option<String> = conn.hget(self.hash_key.as_str(), id).await?;
        debug!(key = %self.hash_key, id, found = raw.is_some(), "HGET user");
        raw.as_deref().map(decode_user).transpose()
    }

    async fn entries(&self) -> StorageResult<HashMap<String, User>> {
        let mut conn = self.connection().await?;

        let raw: HashMap<String, String> = conn.hgetall(self.hash_key.as_str()).await?;
        debug!(key = %self.hash_key, count = raw.len(), "HGETALL users");
        Ok(decode_entries(raw))
    }

    async fn delete(&self, id: &str) -> StorageResult<bool> {
        let mut conn = self.connection().await?;

        let removed: u64 = conn.hdel(self.hash_key.as_str(), id).await?;
        debug!(key = %self.hash_key, id, removed, "HDEL user");
        Ok(removed > 0)
    }

    async fn health_check(&self) -> StorageResult<()> {
        let mut conn = self.connection().await?;

        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        if pong == "PONG" {
            Ok(())
        } else {
            Err(StorageError::Unavailable)
        }
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
