//! File backend implementation
//!
//! Persists translation records as one JSON document per locale inside a
//! configured directory (`en-US.json`, `zh-CN.json`, ...). Nested objects are
//! flattened into dot-joined keys on load, so hand-maintained files may use
//! either `{"commands": {"start": "..."}}` or `{"commands.start": "..."}`.
//! Saves always write the flat form.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::{debug, error, warn};

use super::Backend;
use crate::models::Translation;
use crate::utils::errors::Result;

/// Directory-of-JSON-files translation storage
#[derive(Clone, Debug)]
pub struct FileBackend {
    directory: PathBuf,
}

impl FileBackend {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn locale_path(&self, locale: &str) -> PathBuf {
        self.directory.join(format!("{}.json", locale))
    }

    /// Read one locale file into a flat key -> value map
    async fn read_locale_file(&self, path: &Path) -> Result<BTreeMap<String, String>> {
        let content = fs::read_to_string(path).await?;
        let document: Value = serde_json::from_str(&content)?;

        let mut entries = BTreeMap::new();
        flatten_value(None, &document, &mut entries);
        Ok(entries)
    }

    async fn write_locale_file(&self, locale: &str, entries: &BTreeMap<String, String>) -> Result<()> {
        if !self.directory.exists() {
            warn!(directory = %self.directory.display(), "Translations directory not found, creating it");
            fs::create_dir_all(&self.directory).await?;
        }

        let serialized = serde_json::to_string_pretty(entries)?;
        fs::write(self.locale_path(locale), serialized).await?;
        Ok(())
    }
}

/// Flatten a JSON document into dot-joined leaf entries
fn flatten_value(prefix: Option<&str>, value: &Value, out: &mut BTreeMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (name, nested) in map {
                let joined = match prefix {
                    Some(prefix) => format!("{}.{}", prefix, name),
                    None => name.clone(),
                };
                flatten_value(Some(&joined), nested, out);
            }
        }
        Value::String(text) => {
            if let Some(key) = prefix {
                out.insert(key.to_string(), text.clone());
            }
        }
        Value::Number(_) | Value::Bool(_) => {
            if let Some(key) = prefix {
                out.insert(key.to_string(), value.to_string());
            }
        }
        // Arrays and nulls have no translation meaning
        _ => {}
    }
}

#[async_trait]
impl Backend for FileBackend {
    async fn load_translations(&self) -> Vec<Translation> {
        let mut dir = match fs::read_dir(&self.directory).await {
            Ok(dir) => dir,
            Err(e) => {
                error!(directory = %self.directory.display(), error = %e,
                       "Failed to read translations directory");
                return Vec::new();
            }
        };

        let mut translations = Vec::new();
        while let Ok(Some(entry)) = dir.next_entry().await {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            match self.read_locale_file(&path).await {
                Ok(entries) => {
                    debug!(locale = locale, count = entries.len(),
                           "Loaded translations from file backend");
                    for (key, value) in entries {
                        translations.push(Translation::new(locale, key, value));
                    }
                }
                Err(e) => {
                    error!(path = %path.display(), error = %e,
                           "Failed to load translation file");
                }
            }
        }

        translations
    }

    async fn save_translation(&self, translation: &Translation) -> Result<()> {
        let path = self.locale_path(&translation.locale);
        let mut entries = if path.exists() {
            self.read_locale_file(&path).await?
        } else {
            BTreeMap::new()
        };

        entries.insert(translation.key.clone(), translation.value.clone());
        self.write_locale_file(&translation.locale, &entries).await?;

        debug!(locale = %translation.locale, key = %translation.key,
               "Translation saved to file backend");
        Ok(())
    }

    async fn delete_translation(&self, translation: &Translation) -> Result<()> {
        let path = self.locale_path(&translation.locale);
        if !path.exists() {
            return Ok(());
        }

        let mut entries = self.read_locale_file(&path).await?;
        let removed = entries.remove(&translation.key).is_some();
        if removed {
            self.write_locale_file(&translation.locale, &entries).await?;
        }

        debug!(locale = %translation.locale, key = %translation.key, removed = removed,
               "Translation delete attempted on file backend");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_nested_keys_flattened_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en-US.json");
        std::fs::write(
            &path,
            r#"{"commands": {"start": {"welcome": "Welcome!"}}, "greeting": "Hello"}"#,
        )
        .unwrap();

        let backend = FileBackend::new(dir.path());
        let mut translations = backend.load_translations().await;
        translations.sort_by(|a, b| a.key.cmp(&b.key));

        assert_eq!(translations.len(), 2);
        assert_eq!(translations[0].key, "commands.start.welcome");
        assert_eq!(translations[0].value, "Welcome!");
        assert_eq!(translations[1].key, "greeting");
        assert_eq!(translations[1].locale, "en-US");
    }

    #[tokio::test]
    async fn test_save_then_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());

        backend
            .save_translation(&Translation::new("zh-CN", "greeting", "你好"))
            .await
            .unwrap();
        backend
            .save_translation(&Translation::new("zh-CN", "farewell", "再见"))
            .await
            .unwrap();

        let loaded = backend.load_translations().await;
        assert_eq!(loaded.len(), 2);
        assert!(loaded
            .iter()
            .any(|t| t.key == "greeting" && t.value == "你好"));
    }

    #[tokio::test]
    async fn test_delete_removes_flattened_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en-US.json");
        std::fs::write(&path, r#"{"menu": {"file": "File", "edit": "Edit"}}"#).unwrap();

        let backend = FileBackend::new(dir.path());
        backend
            .delete_translation(&Translation::new("en-US", "menu.file", ""))
            .await
            .unwrap();

        let loaded = backend.load_translations().await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].key, "menu.edit");
    }

    #[tokio::test]
    async fn test_delete_missing_locale_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());

        backend
            .delete_translation(&Translation::new("fr-FR", "greeting", ""))
            .await
            .unwrap();
    }
}
