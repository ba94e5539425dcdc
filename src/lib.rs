//! LingoVault Translation Engine
//!
//! A translation management engine with prioritized storage backends and
//! cache-backed lookups. This library resolves display strings for
//! (locale, key) pairs with locale fallback and argument formatting, lazily
//! synthesizes entries for strings that were never translated, and keeps a
//! cache store and a chain of persistent backends consistent through saves
//! and deletes.

#![allow(non_snake_case)]

pub mod assets;
pub mod backend;
pub mod cache;
pub mod config;
pub mod engine;
pub mod format;
pub mod models;
pub mod permissions;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{LingoVaultError, Result};

// Re-export main components for easy access
pub use backend::Backend;
pub use cache::CacheStore;
pub use engine::Engine;
pub use format::{Formatter, MessageFormatter, TranslationParams};
pub use models::Translation;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
