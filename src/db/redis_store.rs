//! Provides the Redis implementation of `ListStore` using the `redis` crate.
//!
//! Data lists grow at the tail (RPUSH) while the registry grows at the head (LPUSH).
//! Also contains integration tests for store operations (requires the `integration-tests` feature).

use super::{ListStore, REGISTRY_KEY};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, LposOptions};
use tracing::{debug, error, info};

/// Holds a multiplexed connection to the Redis server.
///
/// The connection is cheap to clone; each operation works on its own clone.
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    /// Opens a connection to the Redis server at `redis_url`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if the URL is malformed or the server cannot be reached.
    pub async fn connect(redis_url: &str) -> Result<Self> {
        info!("Connecting to Redis...");

        let client = redis::Client::open(redis_url).map_err(|e| {
            error!("Invalid Redis URL: {}", e);
            AppError::from(e)
        })?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                error!("Failed to connect to Redis: {}", e);
                AppError::from(e)
            })?;

        info!("Connected to Redis successfully");
        Ok(Self { conn })
    }
}

#[async_trait]
impl ListStore for RedisStore {
    async fn append(&self, list: &str, value: &str) -> Result<usize> {
        debug!("RPUSH {} {}", list, value);
        let mut conn = self.conn.clone();
        Ok(conn.rpush(list, value).await?)
    }

    async fn prepend_registry_entry(&self, value: &str) -> Result<usize> {
        debug!("LPUSH {} {}", REGISTRY_KEY, value);
        let mut conn = self.conn.clone();
        Ok(conn.lpush(REGISTRY_KEY, value).await?)
    }

    async fn range(&self, list: &str) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        Ok(conn.lrange(list, 0, -1).await?)
    }

    async fn length(&self, list: &str) -> Result<usize> {
        let mut conn = self.conn.clone();
        Ok(conn.llen(list).await?)
    }

    async fn index_at(&self, list: &str, index: usize) -> Result<Option<String>> {
        let index = isize::try_from(index)
            .map_err(|_| AppError::Cli(format!("index {} out of range", index)))?;
        let mut conn = self.conn.clone();
        Ok(conn.lindex(list, index).await?)
    }

    async fn position_of(&self, list: &str, value: &str) -> Result<Option<usize>> {
        let mut conn = self.conn.clone();
        Ok(conn.lpos(list, value, LposOptions::default()).await?)
    }

    async fn remove_all_occurrences(&self, list: &str, value: &str) -> Result<usize> {
        debug!("LREM {} 0 {}", list, value);
        let mut conn = self.conn.clone();
        // A count of 0 removes every match.
        Ok(conn.lrem(list, 0, value).await?)
    }

    async fn delete_key(&self, key: &str) -> Result<bool> {
        debug!("DEL {}", key);
        let mut conn = self.conn.clone();
        let deleted: usize = conn.del(key).await?;
        Ok(deleted > 0)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        Ok(conn.exists(key).await?)
    }

    async fn get_value(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        Ok(conn.get(key).await?)
    }

    async fn set_value(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        info!("Flushing the Redis database");
        let mut conn = self.conn.clone();
        redis::cmd("FLUSHDB").query_async::<_, ()>(&mut conn).await?;
        Ok(())
    }
}
