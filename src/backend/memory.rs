//! In-memory backend implementation
//!
//! Holds translation records in a process-local map. Useful for tests,
//! ephemeral deployments, and as the lowest-priority seed backend.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use super::Backend;
use crate::models::Translation;
use crate::utils::errors::Result;

/// Process-local translation backend
#[derive(Debug, Default)]
pub struct MemoryBackend {
    translations: RwLock<HashMap<(String, String), Translation>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-populated with records
    pub fn with_translations(translations: Vec<Translation>) -> Self {
        let map = translations
            .into_iter()
            .map(|t| ((t.locale.clone(), t.key.clone()), t))
            .collect();
        Self {
            translations: RwLock::new(map),
        }
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.translations
            .read()
            .expect("translation map lock poisoned")
            .len()
    }

    /// Whether the backend holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn load_translations(&self) -> Vec<Translation> {
        self.translations
            .read()
            .expect("translation map lock poisoned")
            .values()
            .cloned()
            .collect()
    }

    async fn save_translation(&self, translation: &Translation) -> Result<()> {
        let mut map = self
            .translations
            .write()
            .expect("translation map lock poisoned");
        map.insert(
            (translation.locale.clone(), translation.key.clone()),
            translation.clone(),
        );
        debug!(locale = %translation.locale, key = %translation.key, "Translation saved to memory backend");
        Ok(())
    }

    async fn delete_translation(&self, translation: &Translation) -> Result<()> {
        let mut map = self
            .translations
            .write()
            .expect("translation map lock poisoned");
        let removed = map
            .remove(&(translation.locale.clone(), translation.key.clone()))
            .is_some();
        debug!(locale = %translation.locale, key = %translation.key, removed = removed,
               "Translation delete attempted on memory backend");
        Ok(())
    }
}
