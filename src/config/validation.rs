//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{LingoVaultError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    if let Some(ref database_config) = settings.database {
        validate_database_config(database_config)?;
    }

    if let Some(ref redis_config) = settings.redis {
        validate_redis_config(redis_config)?;
    }

    Ok(())
}

/// Validate translation engine configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_locale.is_empty() {
        return Err(LingoVaultError::Config(
            "Default locale is required".to_string(),
        ));
    }

    for (locale, fallbacks) in &config.fallback_locales {
        if locale.is_empty() {
            return Err(LingoVaultError::Config(
                "Fallback map contains an empty locale name".to_string(),
            ));
        }
        if fallbacks.iter().any(|l| l.is_empty()) {
            return Err(LingoVaultError::Config(format!(
                "Fallback list for locale '{}' contains an empty entry",
                locale
            )));
        }
    }

    if let Some(ref scope) = config.scope {
        if scope.is_empty() {
            return Err(LingoVaultError::Config(
                "Scope must be non-empty when set".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(LingoVaultError::Config(
            "Database URL is required".to_string(),
        ));
    }

    if config.max_connections == 0 {
        return Err(LingoVaultError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(LingoVaultError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

/// Validate Redis configuration
fn validate_redis_config(config: &super::RedisConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(LingoVaultError::Config("Redis URL is required".to_string()));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LingoVaultError::Config(
            "Logging level is required".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{I18nConfig, Settings};

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_empty_default_locale_rejected() {
        let settings = Settings {
            i18n: I18nConfig {
                default_locale: String::new(),
                ..I18nConfig::default()
            },
            ..Settings::default()
        };
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_empty_fallback_entry_rejected() {
        let mut i18n = I18nConfig::default();
        i18n.fallback_locales
            .insert("zh-CN".to_string(), vec!["zh-TW".to_string(), String::new()]);
        let settings = Settings {
            i18n,
            ..Settings::default()
        };
        assert!(validate_settings(&settings).is_err());
    }
}
