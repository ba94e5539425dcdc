//! Error handling for LingoVault
//!
//! This module defines the main error types used throughout the library
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for LingoVault operations
#[derive(Error, Debug)]
pub enum LingoVaultError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save translation {locale}/{key}: no backend accepted it")]
    SaveRejected { locale: String, key: String },

    #[error("Formatting error: {0}")]
    Format(String),

    #[error("Inline edit assets not found in any search path: {0}")]
    AssetMissing(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for LingoVault operations
pub type Result<T> = std::result::Result<T, LingoVaultError>;

impl LingoVaultError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            LingoVaultError::Database(_) => true,
            LingoVaultError::Redis(_) => true,
            LingoVaultError::Serialization(_) => false,
            LingoVaultError::Io(_) => true,
            LingoVaultError::Config(_) => false,
            LingoVaultError::SaveRejected { .. } => true,
            LingoVaultError::Format(_) => true,
            LingoVaultError::AssetMissing(_) => false,
            LingoVaultError::InvalidInput(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_rejected_message() {
        let err = LingoVaultError::SaveRejected {
            locale: "en-US".to_string(),
            key: "greeting".to_string(),
        };
        assert!(err.to_string().contains("en-US/greeting"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_config_error_not_recoverable() {
        let err = LingoVaultError::Config("default locale is required".to_string());
        assert!(!err.is_recoverable());
    }
}
