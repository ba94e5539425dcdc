//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Main configuration structure for applications embedding LingoVault
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub i18n: I18nConfig,
    pub database: Option<DatabaseConfig>,
    pub redis: Option<RedisConfig>,
    pub logging: LoggingConfig,
}

/// Translation engine configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    /// Locale used when a request carries no locale and as the last fallback
    pub default_locale: String,
    /// Extra fallback locales consulted per requested locale, in order
    #[serde(default)]
    pub fallback_locales: HashMap<String, Vec<String>>,
    /// Namespace prefix recorded on newly synthesized translation keys
    #[serde(default)]
    pub scope: Option<String>,
    /// Value given to synthesized placeholder entries
    #[serde(default)]
    pub default_value: String,
}

/// Database backend configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Redis cache store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RedisConfig {
    pub url: String,
    pub prefix: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("LINGOVAULT"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::LingoVaultError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            i18n: I18nConfig::default(),
            database: None,
            redis: None,
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/lingovault".to_string(),
            },
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: crate::engine::DEFAULT_LOCALE.to_string(),
            fallback_locales: HashMap::new(),
            scope: None,
            default_value: String::new(),
        }
    }
}
