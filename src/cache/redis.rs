//! Redis cache store implementation
//!
//! Shares one cache across processes. Keys are prefixed per deployment and
//! values are JSON snapshots. No TTL is applied: translation records are
//! never implicitly expired.

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::debug;

use super::CacheStore;
use crate::config::RedisConfig;
use crate::models::Translation;
use crate::utils::errors::Result;

/// Redis-backed cache store
#[derive(Clone)]
pub struct RedisCacheStore {
    connection_manager: redis::aio::ConnectionManager,
    prefix: String,
}

impl RedisCacheStore {
    /// Create a new Redis cache store from configuration
    pub async fn new(config: &RedisConfig) -> Result<Self> {
        let client = redis::Client::open(config.url.as_str())?;
        let connection_manager = redis::aio::ConnectionManager::new(client).await?;

        Ok(Self {
            connection_manager,
            prefix: config.prefix.clone(),
        })
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn set(&self, key: &str, translation: &Translation) -> Result<()> {
        let full_key = self.full_key(key);
        let serialized = serde_json::to_string(translation)?;

        let mut conn = self.connection_manager.clone();
        let _: () = conn.set(&full_key, serialized).await?;

        debug!(key = %full_key, "Translation set in Redis cache");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Translation>> {
        let full_key = self.full_key(key);

        let mut conn = self.connection_manager.clone();
        let serialized: Option<String> = conn.get(&full_key).await?;

        match serialized {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => {
                debug!(key = %full_key, "Key not found in Redis cache");
                Ok(None)
            }
        }
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let full_key = self.full_key(key);

        let mut conn = self.connection_manager.clone();
        let deleted: u32 = conn.del(&full_key).await?;

        debug!(key = %full_key, deleted = deleted > 0, "Key deletion attempted in Redis cache");
        Ok(())
    }
}

impl std::fmt::Debug for RedisCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheStore")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::cache_key;

    fn create_test_config() -> RedisConfig {
        RedisConfig {
            url: "redis://localhost:6379".to_string(),
            prefix: "test_lingovault:".to_string(),
        }
    }

    #[tokio::test]
    #[ignore]
    async fn test_round_trip_against_local_redis() {
        let store = RedisCacheStore::new(&create_test_config()).await.unwrap();
        let key = cache_key("en-US", "greeting");

        store
            .set(&key, &Translation::new("en-US", "greeting", "Hello"))
            .await
            .unwrap();
        let found = store.get(&key).await.unwrap();
        assert_eq!(found.unwrap().value, "Hello");

        store.delete(&key).await.unwrap();
        assert!(store.get(&key).await.unwrap().is_none());
    }
}
