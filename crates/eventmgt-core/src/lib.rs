//! # eventmgt-core
//!
//! Core types, settings, and error types shared by the eventmgt-rs crates.
//! This crate has no framework dependencies and provides the foundation for
//! the ORM mapping and registration crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Settings and global configuration
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration
//! - [`utils`] - Text helpers

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{EventMgtError, EventMgtResult, ValidationError};
pub use settings::{Settings, SETTINGS};
