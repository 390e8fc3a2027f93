//! Shared library for the AniList mapper workspace.
//!
//! This crate provides common functionality used by the binary crates:
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::Config;
pub use logging::LogConfig;

/// Common result type using anyhow::Error
pub type Result<T> = anyhow::Result<T>;
