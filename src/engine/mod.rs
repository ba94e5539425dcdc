//! Translation resolution engine
//!
//! The engine orchestrates translation flow between prioritized storage
//! backends and the cache store: full loads at construction and on store
//! replacement, cache-first lookup with locale fallback, synthesis of
//! placeholder entries on total miss, and write-through saves and deletes.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use futures::future::join_all;
use tracing::{debug, warn};

use crate::backend::Backend;
use crate::cache::{cache_key, CacheStore, MemoryCacheStore};
use crate::config::I18nConfig;
use crate::format::{plural_form, Formatter, MessageFormatter, TranslationParams};
use crate::models::Translation;
use crate::utils::errors::{LingoVaultError, Result};
use crate::utils::logging::{log_lookup, log_mutation};

/// Locale used when nothing else is configured
pub const DEFAULT_LOCALE: &str = "en-US";

/// Translation resolution and caching engine.
///
/// Cheap to clone; clones share the backend chain and the cache store, so
/// derived instances created with [`Engine::scoped`] or
/// [`Engine::with_fallbacks`] observe the same data.
#[derive(Clone)]
pub struct Engine {
    /// Prioritized backend chain; index 0 has the highest priority
    backends: Arc<Vec<Arc<dyn Backend>>>,
    /// Current cache store; swappable at runtime via `set_cache_store`
    cache_store: Arc<RwLock<Arc<dyn CacheStore>>>,
    /// Configured fallback locales per requested locale
    fallback_locales: HashMap<String, Vec<String>>,
    /// Fallbacks applying to this instance regardless of requested locale
    instance_fallbacks: Vec<String>,
    default_locale: String,
    /// Namespace prefix recorded on synthesized keys
    scope: Option<String>,
    /// Value given to synthesized placeholder entries
    default_value: String,
    formatter: Arc<dyn Formatter>,
}

impl Engine {
    /// Create an engine with a default in-memory cache store and load every
    /// backend into it
    pub async fn new(backends: Vec<Arc<dyn Backend>>) -> Result<Self> {
        Self::with_config(&I18nConfig::default(), backends).await
    }

    /// Create an engine from configuration
    pub async fn with_config(config: &I18nConfig, backends: Vec<Arc<dyn Backend>>) -> Result<Self> {
        let store: Arc<dyn CacheStore> = Arc::new(MemoryCacheStore::new());
        let engine = Self {
            backends: Arc::new(backends),
            cache_store: Arc::new(RwLock::new(store)),
            fallback_locales: config.fallback_locales.clone(),
            instance_fallbacks: Vec::new(),
            default_locale: config.default_locale.clone(),
            scope: config.scope.clone(),
            default_value: config.default_value.clone(),
            formatter: Arc::new(MessageFormatter::new()),
        };
        engine.load_to_cache_store().await?;
        Ok(engine)
    }

    /// Derive an instance whose synthesized keys carry a namespace prefix
    pub fn scoped(&self, scope: impl Into<String>) -> Self {
        let mut derived = self.clone();
        derived.scope = Some(scope.into());
        derived
    }

    /// Derive an instance with extra fallback locales consulted before the
    /// configured per-locale fallbacks
    pub fn with_fallbacks(&self, locales: Vec<String>) -> Self {
        let mut derived = self.clone();
        derived.instance_fallbacks = locales;
        derived
    }

    /// Derive an instance whose synthesized entries carry the given value
    pub fn with_default_value(&self, value: impl Into<String>) -> Self {
        let mut derived = self.clone();
        derived.default_value = value.into();
        derived
    }

    /// Derive an instance using a custom formatter
    pub fn with_formatter(&self, formatter: Arc<dyn Formatter>) -> Self {
        let mut derived = self.clone();
        derived.formatter = formatter;
        derived
    }

    /// The engine's default locale
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    fn current_cache_store(&self) -> Arc<dyn CacheStore> {
        self.cache_store
            .read()
            .expect("cache store lock poisoned")
            .clone()
    }

    /// Swap the cache store, then re-run the full load against the new store
    pub async fn set_cache_store(&self, store: Arc<dyn CacheStore>) -> Result<()> {
        {
            let mut guard = self.cache_store.write().expect("cache store lock poisoned");
            *guard = store;
        }
        self.load_to_cache_store().await
    }

    /// Load every backend into the cache store.
    ///
    /// Backends are iterated from lowest priority to highest so that later
    /// writes overwrite earlier ones: the first-declared backend wins any
    /// (locale, key) collision. This ordering is load-bearing.
    async fn load_to_cache_store(&self) -> Result<()> {
        for backend in self.backends.iter().rev() {
            for translation in backend.load_translations().await {
                let translation = translation.with_backend(Arc::clone(backend));
                self.add_translation(&translation).await?;
            }
        }
        Ok(())
    }

    /// Build a `locale -> key -> Translation` snapshot straight from the
    /// backends, for inspection and administration. Uses the same precedence
    /// as the cache load: the highest-priority backend's record wins per key.
    pub async fn load_translations(&self) -> HashMap<String, HashMap<String, Translation>> {
        let mut translations: HashMap<String, HashMap<String, Translation>> = HashMap::new();

        for backend in self.backends.iter().rev() {
            for translation in backend.load_translations().await {
                let translation = translation.with_backend(Arc::clone(backend));
                translations
                    .entry(translation.locale.clone())
                    .or_default()
                    .insert(translation.key.clone(), translation);
            }
        }

        translations
    }

    /// Mirror a single record into the cache store
    pub async fn add_translation(&self, translation: &Translation) -> Result<()> {
        self.current_cache_store()
            .set(&cache_key(&translation.locale, &translation.key), translation)
            .await
    }

    /// Persist a record through the backend chain.
    ///
    /// Backends are tried strictly in priority order; the first success
    /// mirrors the record into the cache store. An error is returned only
    /// when every backend refuses, and the cache is left untouched then.
    pub async fn save_translation(&self, translation: &Translation) -> Result<()> {
        for backend in self.backends.iter() {
            match backend.save_translation(translation).await {
                Ok(()) => {
                    self.add_translation(translation).await?;
                    log_mutation(&translation.locale, &translation.key, "save");
                    return Ok(());
                }
                Err(e) => {
                    debug!(locale = %translation.locale, key = %translation.key, error = %e,
                           "Backend rejected translation save, trying next");
                }
            }
        }

        Err(LingoVaultError::SaveRejected {
            locale: translation.locale.clone(),
            key: translation.key.clone(),
        })
    }

    /// Delete a record from every backend, then from the cache store.
    ///
    /// The record may exist in more than one backend, so every backend is
    /// asked unconditionally. Per-backend failures are logged and discarded;
    /// only the cache deletion outcome is reported.
    pub async fn delete_translation(&self, translation: &Translation) -> Result<()> {
        let deletes = self
            .backends
            .iter()
            .map(|backend| backend.delete_translation(translation));
        for result in join_all(deletes).await {
            if let Err(e) = result {
                debug!(locale = %translation.locale, key = %translation.key, error = %e,
                       "Backend delete failed");
            }
        }

        log_mutation(&translation.locale, &translation.key, "delete");
        self.current_cache_store()
            .delete(&cache_key(&translation.locale, &translation.key))
            .await
    }

    /// Resolve a display string for a (locale, key) pair.
    ///
    /// An empty locale means the default locale. The cache is probed for the
    /// requested locale, then each fallback locale in order, then the default
    /// locale. On total miss a placeholder entry is synthesized and persisted
    /// so it surfaces for later human translation. The caller always receives
    /// a non-empty string: the resolved value, or the key itself.
    pub async fn translate(
        &self,
        locale: &str,
        key: &str,
        params: Option<&TranslationParams>,
    ) -> String {
        let locale = if locale.is_empty() {
            self.default_locale.clone()
        } else {
            locale.to_string()
        };

        let mut fallback_locales = self.instance_fallbacks.clone();
        if let Some(configured) = self.fallback_locales.get(&locale) {
            fallback_locales.extend(configured.iter().cloned());
        }
        fallback_locales.push(self.default_locale.clone());

        // The scoped key is used for persistence only, never for probing:
        // existing translations are addressed by bare key, while synthesized
        // placeholders record the scoped key for later disambiguation. The
        // asymmetry is intentional.
        let translation_key = match &self.scope {
            Some(scope) => format!("{}.{}", scope, key),
            None => key.to_string(),
        };

        let store = self.current_cache_store();

        let mut resolved = probe(&store, &locale, key).await;

        if resolved.is_none() {
            for fallback_locale in &fallback_locales {
                resolved = probe(&store, fallback_locale, key).await;
                if resolved.is_some() {
                    break;
                }
            }
        }

        if resolved.is_none() {
            resolved = probe(&store, &self.default_locale, key).await;
        }

        log_lookup(&locale, key, resolved.is_some());

        if resolved.is_none() {
            let translation = Translation {
                locale: locale.clone(),
                key: translation_key,
                value: self.default_value.clone(),
                backend: self.backends.first().map(Arc::clone),
            };
            if let Err(e) = self.save_translation(&translation).await {
                warn!(locale = %locale, key = %key, error = %e,
                      "Failed to persist synthesized translation");
            }
            resolved = Some(translation);
        }

        let value = match resolved {
            Some(translation) if translation.is_translated() => translation.value,
            _ => key.to_string(),
        };

        match self.formatter.format(&locale, &value, params) {
            Ok(formatted) => formatted,
            Err(e) => {
                debug!(locale = %locale, key = %key, error = %e,
                       "Formatting failed, returning unformatted value");
                value
            }
        }
    }

    /// Resolve a pluralized display string.
    ///
    /// The plural form for `count` under the locale's rules is appended to
    /// the key (`key.one`, `key.few`, ...) and `count` is made available to
    /// the formatter as an argument.
    pub async fn translate_with_count(
        &self,
        locale: &str,
        key: &str,
        count: i32,
        params: Option<&TranslationParams>,
    ) -> String {
        let effective_locale = if locale.is_empty() {
            self.default_locale.clone()
        } else {
            locale.to_string()
        };

        let plural_key = format!("{}.{}", key, plural_form(&effective_locale, count));

        let mut merged = params.cloned().unwrap_or_default();
        merged.insert("count".to_string(), count.to_string());

        self.translate(&effective_locale, &plural_key, Some(&merged))
            .await
    }
}

/// Probe the cache for a usable (non-empty) translation
async fn probe(store: &Arc<dyn CacheStore>, locale: &str, key: &str) -> Option<Translation> {
    match store.get(&cache_key(locale, key)).await {
        Ok(Some(translation)) if translation.is_translated() => Some(translation),
        Ok(_) => None,
        Err(e) => {
            debug!(locale = %locale, key = %key, error = %e, "Cache probe failed");
            None
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("backends", &self.backends.len())
            .field("default_locale", &self.default_locale)
            .field("scope", &self.scope)
            .field("instance_fallbacks", &self.instance_fallbacks)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    async fn engine_with_backend(translations: Vec<Translation>) -> (Engine, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::with_translations(translations));
        let engine = Engine::new(vec![backend.clone() as Arc<dyn Backend>])
            .await
            .unwrap();
        (engine, backend)
    }

    #[tokio::test]
    async fn test_empty_locale_uses_default() {
        let (engine, _backend) = engine_with_backend(vec![Translation::new(
            "en-US",
            "greeting",
            "Hello",
        )])
        .await;

        assert_eq!(engine.translate("", "greeting", None).await, "Hello");
    }

    #[tokio::test]
    async fn test_scope_applies_to_synthesized_key_only() {
        let (engine, backend) = engine_with_backend(vec![Translation::new(
            "en-US",
            "greeting",
            "Hello",
        )])
        .await;
        let scoped = engine.scoped("admin");

        // Probing still uses the bare key, so the existing entry resolves
        assert_eq!(scoped.translate("en-US", "greeting", None).await, "Hello");

        // A total miss synthesizes under the scoped key
        assert_eq!(scoped.translate("en-US", "missing", None).await, "missing");
        let saved = backend.load_translations().await;
        assert!(saved.iter().any(|t| t.key == "admin.missing"));
        assert!(!saved.iter().any(|t| t.key == "missing"));
    }

    #[tokio::test]
    async fn test_synthesized_value_from_derived_instance() {
        let (engine, backend) = engine_with_backend(vec![]).await;
        let lenient = engine.with_default_value("TODO translate");

        // The synthesized record carries the instance default text and is
        // therefore immediately usable on the next lookup
        assert_eq!(
            lenient.translate("en-US", "greeting", None).await,
            "TODO translate"
        );
        let saved = backend.load_translations().await;
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].value, "TODO translate");
    }

    #[tokio::test]
    async fn test_save_with_no_backends_is_rejected() {
        let engine = Engine::new(vec![]).await.unwrap();
        let record = Translation::new("en-US", "greeting", "Hello");

        let result = engine.save_translation(&record).await;
        assert!(matches!(
            result,
            Err(LingoVaultError::SaveRejected { .. })
        ));

        // translate still degrades gracefully with nothing to save into
        assert_eq!(engine.translate("en-US", "greeting", None).await, "greeting");
    }
}
