//! Storage backends module
//!
//! Backends are the ordered sources of truth for translation records.
//! Multiple backends form a prioritized chain: the engine loads all of them
//! into its cache store and resolves key collisions in favor of the backend
//! declared first.

pub mod database;
pub mod file;
pub mod memory;

pub use database::DatabaseBackend;
pub use file::FileBackend;
pub use memory::MemoryBackend;

use async_trait::async_trait;

use crate::models::Translation;
use crate::utils::errors::Result;

/// Storage provider for translation records.
///
/// Implementations own their persistence format entirely. Load failures are
/// an implementation-internal concern: a backend that cannot load reports the
/// problem itself and returns an empty list, and the engine accepts whatever
/// comes back as that backend's contribution.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Produce the complete list of records currently held by this backend.
    ///
    /// Called at engine construction and on cache store replacement. May be
    /// expensive; the engine caches individual records, never this list.
    async fn load_translations(&self) -> Vec<Translation>;

    /// Persist one record. Saving an existing (locale, key) pair must upsert,
    /// since concurrent cache misses can race on the same placeholder.
    async fn save_translation(&self, translation: &Translation) -> Result<()>;

    /// Best-effort delete. Deleting an absent record is not an error.
    async fn delete_translation(&self, translation: &Translation) -> Result<()>;
}
