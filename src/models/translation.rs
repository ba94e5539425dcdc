//! Translation record model

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::backend::Backend;

/// The unit of data moved between storage backends and the cache store.
///
/// An empty `value` means the entry exists but has not been translated yet.
/// The (locale, key) pair is unique within a single backend; the same pair
/// may exist redundantly across backends and the engine picks one
/// deterministically by backend priority.
#[derive(Clone, Serialize, Deserialize)]
pub struct Translation {
    pub locale: String,
    pub key: String,
    pub value: String,
    /// Handle to the backend that owns this record; never serialized
    #[serde(skip)]
    pub backend: Option<Arc<dyn Backend>>,
}

impl Translation {
    /// Create a new translation record without an owning backend
    pub fn new(
        locale: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            locale: locale.into(),
            key: key.into(),
            value: value.into(),
            backend: None,
        }
    }

    /// Attach the owning backend to this record
    pub fn with_backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Whether this record carries a usable display value
    pub fn is_translated(&self) -> bool {
        !self.value.is_empty()
    }
}

impl std::fmt::Debug for Translation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translation")
            .field("locale", &self.locale)
            .field("key", &self.key)
            .field("value", &self.value)
            .field("has_backend", &self.backend.is_some())
            .finish()
    }
}
