//! In-memory cache store implementation
//!
//! The default store created by the engine. Holds serialized snapshots in a
//! lock-guarded map, which keeps stored records detached from their backend
//! handles the same way out-of-process stores do.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::CacheStore;
use crate::models::Translation;
use crate::utils::errors::Result;

/// Process-local cache store
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.read().expect("cache lock poisoned").len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn set(&self, key: &str, translation: &Translation) -> Result<()> {
        let serialized = serde_json::to_string(translation)?;
        self.entries
            .write()
            .expect("cache lock poisoned")
            .insert(key.to_string(), serialized);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Translation>> {
        let serialized = {
            let entries = self.entries.read().expect("cache lock poisoned");
            entries.get(key).cloned()
        };

        match serialized {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries
            .write()
            .expect("cache lock poisoned")
            .remove(key);
        Ok(())
    }
}
