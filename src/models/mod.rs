//! Data models module
//!
//! This module contains the data structures moved between backends and the cache

pub mod translation;

pub use translation::Translation;
