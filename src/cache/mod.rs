//! Cache store module
//!
//! The cache store is the fast key/value layer mirroring backend contents.
//! It is populated in full at engine construction and mutated on every
//! subsequent add/delete; entries never expire on their own.

pub mod memory;
pub mod redis;

pub use memory::MemoryCacheStore;
pub use redis::RedisCacheStore;

use async_trait::async_trait;

use crate::models::Translation;
use crate::utils::errors::Result;

/// Separator between locale and key in composite cache keys
const CACHE_KEY_SEPARATOR: &str = "/";

/// Build the composite cache key for a (locale, key) pair
pub fn cache_key(locale: &str, key: &str) -> String {
    format!("{}{}{}", locale, CACHE_KEY_SEPARATOR, key)
}

/// Key/value layer holding serialized translation snapshots.
///
/// Implementations must be safe for concurrent use; the engine performs no
/// locking of its own around store calls. `get` distinguishes a missing key
/// (`Ok(None)`) from a present record with an empty value (`Ok(Some(..))`).
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Store a snapshot of the record, overwriting any prior value
    async fn set(&self, key: &str, translation: &Translation) -> Result<()>;

    /// Look up a record by composite key; `None` means not found
    async fn get(&self, key: &str) -> Result<Option<Translation>>;

    /// Remove an entry; deleting a nonexistent key is not an error
    async fn delete(&self, key: &str) -> Result<()>;
}
